use leptos::prelude::*;

use crate::config::NotesConfig;
use crate::notes_core::{NotesController, Rejection, SubmitOutcome};
use crate::persistent_list::PersistentList;
use crate::storage::BrowserStorage;

fn rejection_hint(rejection: Rejection) -> &'static str {
    match rejection {
        Rejection::EmptyTitle => "Give the note a title.",
        Rejection::EmptyContent => "Write something in the note.",
    }
}

#[component]
pub fn NotesApp() -> impl IntoView {
    let config = NotesConfig::default();
    let controller = RwSignal::new(NotesController::new(PersistentList::new(
        BrowserStorage,
        config.storage_key,
        config.seed_notes,
    )));
    let (hint, set_hint) = signal(None::<&'static str>);

    // Derived views so typing in the form does not rebuild the cards.
    let ready = Memo::new(move |_| controller.with(|c| c.is_ready()));
    let editing = Memo::new(move |_| controller.with(|c| c.is_editing()));
    let notes = Memo::new(move |_| controller.with(|c| c.notes().to_vec()));

    Effect::new(move |_| {
        controller.update(|c| c.load());
    });

    let submit = move |_: leptos::ev::MouseEvent| {
        let outcome = controller.try_update(|c| c.submit());
        set_hint.set(match outcome {
            Some(SubmitOutcome::Rejected(rejection)) => Some(rejection_hint(rejection)),
            _ => None,
        });
    };

    let update_title = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        controller.update(|c| c.set_title(value));
    };

    let update_content = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        controller.update(|c| c.set_content(value));
    };

    let body = move || {
        if !ready.get() {
            return ().into_any();
        }
        view! {
            <div class="note-form" style="margin-bottom: 1rem;">
                <input
                    type="text"
                    placeholder="Title"
                    style="width: 100%; box-sizing: border-box; padding: 0.5rem; border-radius: 6px; border: 1px solid var(--border-color);"
                    prop:value=move || controller.with(|c| c.draft().title.clone())
                    on:input=update_title
                />
                <textarea
                    placeholder="Content"
                    rows="4"
                    style="width: 100%; box-sizing: border-box; margin-top: 0.5rem; padding: 0.5rem; border-radius: 6px; border: 1px solid var(--border-color);"
                    prop:value=move || controller.with(|c| c.draft().content.clone())
                    on:input=update_content
                ></textarea>
                {move || hint.get().map(|text| view! {
                    <p class="form-hint" style="margin: 0.25rem 0; color: var(--hint-color); font-size: 0.9rem;">{text}</p>
                })}
                <div style="display: flex; gap: 0.5rem; margin-top: 0.5rem;">
                    <button class="primary" on:click=submit>
                        {move || if editing.get() { "Update Note" } else { "Add Note" }}
                    </button>
                    {move || editing.get().then(|| view! {
                        <button
                            on:click=move |_| {
                                controller.update(|c| c.cancel_edit());
                                set_hint.set(None);
                            }
                        >
                            "Cancel"
                        </button>
                    })}
                </div>
            </div>
            <div class="note-grid" style="display: grid; gap: 1rem;">
                {move || notes.get().into_iter().map(|note| {
                    let id = note.id;
                    view! {
                        <div class="note-card" style="padding: 1rem; border-radius: 8px; background: var(--card-bg);">
                            <div style="display: flex; align-items: center; justify-content: space-between;">
                                <h2 style="margin: 0; font-size: 1.1rem; font-weight: 500;">{note.title}</h2>
                                <div style="display: flex; gap: 0.5rem;">
                                    <button
                                        class="ghost"
                                        title="Edit note"
                                        on:click=move |_| {
                                            controller.update(|c| {
                                                c.begin_edit(id);
                                            });
                                            set_hint.set(None);
                                        }
                                    >
                                        "✎"
                                    </button>
                                    <button
                                        class="ghost"
                                        title="Delete note"
                                        on:click=move |_| {
                                            controller.update(|c| {
                                                c.delete(id);
                                            });
                                        }
                                    >
                                        "🗑"
                                    </button>
                                </div>
                            </div>
                            <p style="margin: 0.5rem 0 0; color: var(--text-muted); white-space: pre-wrap;">{note.content}</p>
                        </div>
                    }
                }).collect::<Vec<_>>()}
            </div>
        }.into_any()
    };

    view! {
        <main class="app-layout" style="display: flex; flex-direction: column; height: 100vh; background: var(--bg-primary); color: var(--text-primary);">
            <header style="padding: 1rem; background: var(--accent-color); box-shadow: 0 1px 3px rgba(0, 0, 0, 0.15);">
                <h1 style="margin: 0; font-size: 1.5rem; font-weight: 700;">"Note Taker"</h1>
            </header>
            <section style="flex: 1; overflow: auto; padding: 1rem;">
                {body}
            </section>
        </main>
    }
}
