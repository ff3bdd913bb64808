//! Landing page.

use leptos::prelude::*;

use crate::app::NavContext;
use crate::components::nav_bar::NavBar;

#[component]
pub fn HomePage() -> impl IntoView {
    NavContext::provide_without_sections();

    view! {
        <NavBar/>
        <main class="home-page">
            <section id="overview" class="home-page__hero">
                <h1>"PyGyat"</h1>
                <p>"Python with rizz. A preprocessor that swaps Python keywords, operators, and builtins for brainrot vocabulary."</p>
                <a href="/docs" class="btn home-page__cta">"Read the docs"</a>
            </section>
            <section id="features" class="home-page__features">
                <h2>"Features"</h2>
                <div class="home-page__cards">
                    <div class="home-page__card">
                        <h3>"Brainrot syntax"</h3>
                        <p>"Write everyday Python with PyGyat terms instead."</p>
                    </div>
                    <div class="home-page__card">
                        <h3>"Two-way translation"</h3>
                        <p>"Translate Python files to PyGyat and back."</p>
                    </div>
                    <div class="home-page__card">
                        <h3>"Editor support"</h3>
                        <p>"Syntax highlighting through the vscode-pygyat extension."</p>
                    </div>
                </div>
            </section>
            <section id="get-started" class="home-page__get-started">
                <h2>"Get started"</h2>
                <pre><code>"$ pip3 install pygyat"</code></pre>
            </section>
        </main>
    }
}
