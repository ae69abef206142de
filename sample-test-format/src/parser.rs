//! The adapters that know about the markup of the problem pages.
//!
//! Everything that depends on how a page is structured lives here, so a change of the markup only
//! requires a new [`SampleParser`](trait.SampleParser.html).

use anyhow::{anyhow, Error};
use scraper::{ElementRef, Html, Selector};

/// Extracts the text blocks labelled by a heading from a page.
pub trait SampleParser {
    /// Find all the blocks whose heading contains `marker` and return their lines, in document
    /// order.
    fn extract_blocks(&self, html: &str, marker: &str) -> Vec<Vec<String>>;
}

/// A [`SampleParser`](trait.SampleParser.html) for pages where the text of a sample is inside the
/// element that immediately follows its heading, like
/// `<h3>Sample Input 1</h3><pre>3 5</pre>`.
#[derive(Debug, Clone)]
pub struct HeadingSiblingParser {
    /// Selector of the headings.
    heading: Selector,
}

impl HeadingSiblingParser {
    /// Make a parser that looks at the headings matched by the `heading` CSS selector.
    pub fn new(heading: &str) -> Result<HeadingSiblingParser, Error> {
        let heading = Selector::parse(heading)
            .map_err(|e| anyhow!("Invalid heading selector {:?}: {:?}", heading, e))?;
        Ok(HeadingSiblingParser { heading })
    }
}

impl Default for HeadingSiblingParser {
    /// The samples of the problem pages are under `<h3>` headings.
    fn default() -> Self {
        HeadingSiblingParser::new("h3").expect("Invalid default heading selector")
    }
}

impl SampleParser for HeadingSiblingParser {
    fn extract_blocks(&self, html: &str, marker: &str) -> Vec<Vec<String>> {
        let document = Html::parse_document(html);
        document
            .select(&self.heading)
            .filter(|heading| heading.text().collect::<String>().contains(marker))
            .map(|heading| {
                let text = heading
                    .next_siblings()
                    .find_map(ElementRef::wrap)
                    .map(|block| block.text().collect::<String>())
                    .unwrap_or_default();
                text.lines().map(String::from).collect()
            })
            .collect()
    }
}

/// Find the value of the hidden `csrf_token` input of the login form.
pub fn find_csrf_token(html: &str) -> Option<String> {
    lazy_static! {
        static ref CSRF: Selector =
            Selector::parse("input[name=\"csrf_token\"]").expect("Invalid csrf selector");
    }
    let document = Html::parse_document(html);
    let token = document
        .select(&CSRF)
        .find_map(|input| input.value().attr("value"))
        .map(String::from);
    token
}
