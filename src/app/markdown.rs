use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag};
use std::sync::OnceLock;
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

fn syntax_set() -> &'static SyntaxSet {
    static SYNTAXES: OnceLock<SyntaxSet> = OnceLock::new();
    SYNTAXES.get_or_init(SyntaxSet::load_defaults_newlines)
}

/// Renders CommonMark with the usual GitHub-style extensions to an HTML fragment.
///
/// Fenced code blocks in a known language are highlighted with CSS classes
/// (`<pre class="codehilite">`); any other code block is left as is.
pub fn render(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut events = Vec::new();
    // (info string, collected text) while inside a fenced block
    let mut fenced: Option<(String, String)> = None;

    for event in Parser::new_ext(markdown, options) {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => {
                fenced = Some((info.to_string(), String::new()));
            }
            Event::Text(text) => match fenced.as_mut() {
                Some((_, code)) => code.push_str(&text),
                None => events.push(Event::Text(text)),
            },
            Event::End(Tag::CodeBlock(kind)) => match fenced.take() {
                Some((info, code)) => match highlight(&info, &code) {
                    Some(block) => events.push(Event::Html(block.into())),
                    None => {
                        let info = CowStr::from(info);
                        events.push(Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(
                            info.clone(),
                        ))));
                        events.push(Event::Text(code.into()));
                        events.push(Event::End(Tag::CodeBlock(CodeBlockKind::Fenced(info))));
                    }
                },
                None => events.push(Event::End(Tag::CodeBlock(kind))),
            },
            other => events.push(other),
        }
    }

    let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut html_output, events.into_iter());
    html_output
}

/// `None` when the info string names no language syntect knows.
fn highlight(info: &str, code: &str) -> Option<String> {
    let lang = info
        .split(|c: char| c.is_whitespace() || c == ',')
        .next()
        .filter(|lang| !lang.is_empty())?;
    let syntaxes = syntax_set();
    let syntax = syntaxes.find_syntax_by_token(lang)?;

    let mut generator =
        ClassedHTMLGenerator::new_with_class_style(syntax, syntaxes, ClassStyle::Spaced);
    for line in LinesWithEndings::from(code) {
        if let Err(err) = generator.parse_html_for_line_which_includes_newline(line) {
            log::debug!("Highlighting {} failed: {}", lang, err);
            return None;
        }
    }

    Some(format!(
        "<pre class=\"codehilite\"><code class=\"language-{}\">{}</code></pre>\n",
        lang,
        generator.finalize()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_heading() {
        assert_eq!(render("# Hello"), "<h1>Hello</h1>\n");
    }

    #[test]
    fn renders_fenced_code_and_tables() {
        let html = render("```rust\nfn main() {}\n```\n\n| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<code class=\"language-rust\">"));
        assert!(html.contains("<table>"));
    }

    #[test]
    fn highlights_known_languages_with_classes() {
        let html = render("```python\nx = 1 < 2\n```\n");
        assert!(html.contains("<pre class=\"codehilite\">"));
        assert!(html.contains("<span class=\"source python\">"));
        assert!(html.contains("&lt;"));
    }

    #[test]
    fn unknown_or_missing_language_stays_plain() {
        let html = render("```nosuchlang\nx < y\n```\n");
        assert_eq!(
            html,
            "<pre><code class=\"language-nosuchlang\">x &lt; y\n</code></pre>\n"
        );

        let html = render("```\nplain\n```\n");
        assert_eq!(html, "<pre><code>plain\n</code></pre>\n");
    }

    #[test]
    fn indented_code_is_untouched() {
        assert_eq!(render("    a < b\n"), "<pre><code>a &lt; b\n</code></pre>\n");
    }
}
