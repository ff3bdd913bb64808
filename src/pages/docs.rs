//! Documentation page with the scroll-synchronized table of contents.

#[cfg(test)]
#[path = "docs_test.rs"]
mod docs_test;

use leptos::prelude::*;

use crate::app::NavContext;
use crate::components::nav_bar::NavBar;
use crate::components::toc_sidebar::TocSidebar;
use crate::state::sections::Section;

/// TOC entries in display order; ids match the `<section>` anchors below.
pub const DOCS_SECTIONS: [(&str, &str); 7] = [
    ("introduction", "Introduction"),
    ("key-features", "Key Features"),
    ("code-example", "Code Example"),
    ("installation", "Installation"),
    ("keyword-mappings", "Keyword Mappings"),
    ("quick-intro", "Quick Intro"),
    ("repository-structure", "Repository Structure"),
];

/// Python to PyGyat keyword pairs shown in the mappings table.
const KEYWORD_MAPPINGS: [(&str, &str); 12] = [
    ("print", "yap"),
    ("True", "Aura"),
    ("False", "Cooked"),
    ("def", "bop"),
    ("return", "its giving"),
    ("while", "let him cook"),
    ("for", "mewing"),
    ("import", "glaze"),
    ("from", "lock in"),
    ("class", "skibidi"),
    ("+", "rizz"),
    ("-", "fanum tax"),
];

pub fn docs_sections() -> Vec<Section> {
    DOCS_SECTIONS
        .iter()
        .map(|(id, label)| Section::new(*id, *label))
        .collect()
}

#[component]
pub fn DocsPage() -> impl IntoView {
    let nav = NavContext::provide(docs_sections());
    let chrome = nav.map(|_| view! { <NavBar/> <TocSidebar/> });

    view! {
        <div class="docs-page">
            {chrome}
            <main class="docs-page__content">
                <DocsContent/>
            </main>
        </div>
    }
}

#[component]
fn DocsContent() -> impl IntoView {
    let rows = KEYWORD_MAPPINGS
        .iter()
        .map(|(python, pygyat)| {
            view! {
                <tr>
                    <td><code>{*python}</code></td>
                    <td><code>{*pygyat}</code></td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <section id="introduction">
            <h1>"PyGyat"</h1>
            <p>"Python with rizz. PyGyat is a Python preprocessor which translates regular Python code into brainrot by replacing certain keywords, operators, and built in functions."</p>
            <p>"Implementation based on " <a href="https://github.com/mathialo/bython">"Bython"</a> "."</p>
        </section>
        <section id="key-features">
            <h2>"Key features"</h2>
            <ul>
                <li>"Write Python using brainrot terms instead."</li>
                <li>"Run PyGyat files using the " <code>"pygyat"</code> " command, just like Python."</li>
                <li>"Translate Python files to PyGyat and vice versa."</li>
                <li>"Real Python keywords that have defined PyGyat mappings are not allowed."</li>
            </ul>
        </section>
        <section id="code-example">
            <h2>"Code example"</h2>
            <img src="/code-example.png" alt="PyGyat Code Example" width="800" height="400"/>
        </section>
        <section id="installation">
            <h2>"Installation"</h2>
            <p>"Install from PyPI:"</p>
            <pre><code>"$ pip3 install pygyat"</code></pre>
            <p>"Or from the git repository:"</p>
            <pre><code>"$ git clone https://github.com/shamith09/pygyat.git\n$ cd pygyat\n$ pip3 install ."</code></pre>
        </section>
        <section id="keyword-mappings">
            <h2>"Keyword mappings"</h2>
            <table>
                <thead>
                    <tr><th>"Python"</th><th>"PyGyat"</th></tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
        <section id="quick-intro">
            <h2>"Quick intro"</h2>
            <p>"PyGyat translates PyGyat files (suggested ending: .gyat) into Python files and runs them with Python, so a working Python installation is required."</p>
            <pre><code>"$ pygyat source.gyat arg1 arg2 ..."</code></pre>
            <p>"The " <code>"py2gyat"</code> " command translates Python to PyGyat:"</p>
            <pre><code>"$ py2gyat test.py"</code></pre>
        </section>
        <section id="repository-structure">
            <h2>"Repository structure"</h2>
            <ul>
                <li><code>"pygyat"</code> " contains the parser and utilities used by the main script."</li>
                <li><code>"etc"</code> " contains manual pages and other auxiliary files."</li>
                <li><code>"scripts"</code> " contains the runnable scripts."</li>
                <li><code>"testcases"</code> " contains sample .gyat and .py files for testing."</li>
                <li><a href="https://github.com/shamith09/vscode-pygyat">"vscode-pygyat"</a> " contains the VS Code syntax highlighting extension."</li>
            </ul>
        </section>
    }
}
