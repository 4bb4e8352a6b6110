//! "Create post" page: fixed layout around the post form.

use leptos::prelude::*;

/// Form for a new post. Submission is handled by the posting endpoint; this
/// component only carries the author's id along with the content.
#[component]
pub fn CreatePostForm(user_id: String) -> impl IntoView {
    view! {
        <form method="post" class="flex flex-col gap-4">
            <input type="hidden" name="user_id" value=user_id/>
            <label for="content" class="text-sm font-medium">"What's new?"</label>
            <textarea
                id="content"
                name="content"
                rows="5"
                required=true
                class="w-full rounded-md border px-3 py-2"
            ></textarea>
            <button type="submit" class="rounded-md bg-black px-4 py-2 text-white">"Post"</button>
        </form>
    }
}

#[component]
pub fn CreatePage(user_id: String) -> impl IntoView {
    view! {
        <div class="container mx-auto px-4 py-6 max-w-lg">
            <h1 class="text-2xl font-semibold mb-6">"Create Post"</h1>
            <CreatePostForm user_id=user_id/>
        </div>
    }
}

/// Render the full HTML document for an authenticated user.
#[must_use]
pub fn render_create_page(user_id: &str) -> String {
    let user_id = user_id.to_owned();
    let html = Owner::new().with(move || {
        view! {
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <title>"Create Post"</title>
                </head>
                <body>
                    <CreatePage user_id=user_id/>
                </body>
            </html>
        }
        .to_html()
    });
    format!("<!DOCTYPE html>{html}")
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
