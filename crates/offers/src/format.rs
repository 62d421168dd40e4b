//! Small text helpers shared by post and reply rendering.

/// `make_money` → `Make Money`.
pub fn title_case_category(category: &str) -> String {
    category
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Escapes text for Telegram's HTML parse mode.
pub fn html_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_cases_categories() {
        assert_eq!(title_case_category("make_money"), "Make Money");
        assert_eq!(title_case_category("crypto_airdrops"), "Crypto Airdrops");
        assert_eq!(title_case_category("gadgets"), "Gadgets");
        assert_eq!(title_case_category("AI_TOOLS"), "Ai Tools");
        assert_eq!(title_case_category(""), "");
    }

    #[test]
    fn escapes_html_specials() {
        assert_eq!(
            html_escape("Tom & Jerry <b>\"x\"</b>"),
            "Tom &amp; Jerry &lt;b&gt;&quot;x&quot;&lt;/b&gt;"
        );
        assert_eq!(html_escape("The Entrepreneur's Edge"), "The Entrepreneur's Edge");
    }
}
