use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    let (drawer_open, set_drawer_open) = signal(false);

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="/" class="nav-brand">
                    <span class="nav-logo">"IK"</span>
                    <span class="nav-title">"InnovKaro"</span>
                </a>
                <div class="nav-links">
                    <a href="#domains" class="nav-link">"Domains"</a>
                    <a href="#colleges" class="nav-link">"Colleges"</a>
                    <a href="#founders" class="nav-link">"Founders"</a>
                    <a href="#faq" class="nav-link">"FAQ"</a>
                    <a href="/profile/create" class="nav-cta">"Get Started"</a>
                </div>
                <button
                    class=move || if drawer_open.get() { "nav-burger active" } else { "nav-burger" }
                    on:click=move |_| set_drawer_open.update(|o| *o = !*o)
                >
                    {move || if drawer_open.get() { "Close" } else { "Menu" }}
                </button>
            </div>

            // Mobile drawer overlay
            <Show when=move || drawer_open.get()>
                <div class="nav-drawer">
                    <div class="nav-drawer-inner">
                        <a href="#domains" class="nav-drawer-link" on:click=move |_| set_drawer_open.set(false)>"Domains"</a>
                        <a href="#colleges" class="nav-drawer-link" on:click=move |_| set_drawer_open.set(false)>"Colleges"</a>
                        <a href="#founders" class="nav-drawer-link" on:click=move |_| set_drawer_open.set(false)>"Founders"</a>
                        <a href="#faq" class="nav-drawer-link" on:click=move |_| set_drawer_open.set(false)>"FAQ"</a>
                        <a href="/profile/create" class="nav-drawer-cta">"Get Started"</a>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
