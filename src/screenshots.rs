use crate::prelude::*;
use regex::Regex;

/// Finds screenshot references embedded in a downloaded game page.
///
/// A reference is an `<img src="/<dir>/...">` tag whose closing quote is followed by a space,
/// exactly as the game pages are rendered. Tags without that space are not picked up.
pub struct ScreenshotScanner {
    re: Regex,
}

impl ScreenshotScanner {
    pub fn new(screenshot_dir: &str) -> Fallible<Self> {
        let pattern = format!(r#"<img src="/({}/[^"]*)" "#, regex::escape(screenshot_dir));
        Ok(ScreenshotScanner {
            re: Regex::new(&pattern)?,
        })
    }

    /// Resource paths (without the leading slash) in page order. Repeated references are kept.
    pub fn scan<'p>(&self, page: &'p str) -> Vec<&'p str> {
        self.re
            .captures_iter(page)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .collect()
    }
}
