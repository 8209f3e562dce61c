use leptos::prelude::*;
use notes_widget::app::NotesApp;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(|| {
        view! { <NotesApp/> }
    })
}
