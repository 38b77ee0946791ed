//! User-agent based crawler classification.
//!
//! A request is treated as coming from a link-unfurler or search indexer when
//! its lower-cased `User-Agent` contains any signature as a substring. There is
//! no word-boundary check, so the generic `bot` signature also catches real
//! browsers whose UA happens to contain it. False positives only cost a
//! server-rendered page; false negatives lose the link preview.

/// Signatures matched by default.
///
/// This is the union of every unfurler and indexer the site has needed to
/// recognize. Entries are lower-case.
pub const DEFAULT_SIGNATURES: &[&str] = &[
    "facebookexternalhit",
    "facebook",
    "twitterbot",
    "twitter",
    "whatsapp",
    "instagram",
    "linkedinbot",
    "linkedin",
    "telegrambot",
    "telegram",
    "discordbot",
    "discord",
    "slackbot",
    "slack",
    "pinterest",
    "googlebot",
    "bingbot",
    "yandex",
    "baiduspider",
    "bot",
];

/// An ordered, de-duplicated set of lower-case user-agent substrings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlerSignatures {
    signatures: Vec<String>,
}

impl Default for CrawlerSignatures {
    fn default() -> Self {
        Self::new(DEFAULT_SIGNATURES.iter().copied())
    }
}

impl CrawlerSignatures {
    /// Build a signature set. Entries are trimmed and lower-cased; blanks and
    /// duplicates are dropped.
    pub fn new<I, S>(signatures: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            signatures: Vec::new(),
        }
        .with_extra(signatures)
    }

    /// Extend the set with additional signatures.
    pub fn with_extra<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for sig in extra {
            let sig = sig.as_ref().trim().to_lowercase();
            if !sig.is_empty() && !self.signatures.contains(&sig) {
                self.signatures.push(sig);
            }
        }
        self
    }

    /// The signatures in match order.
    pub fn as_slice(&self) -> &[String] {
        &self.signatures
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    /// First signature contained in `user_agent`, if any.
    pub fn matching(&self, user_agent: &str) -> Option<&str> {
        let ua = user_agent.to_lowercase();
        self.signatures
            .iter()
            .find(|sig| ua.contains(sig.as_str()))
            .map(String::as_str)
    }

    /// Whether `user_agent` identifies a crawler. A missing header is an
    /// empty string and never matches.
    pub fn is_crawler(&self, user_agent: Option<&str>) -> bool {
        self.matching(user_agent.unwrap_or_default()).is_some()
    }
}

/// Classify a user agent against the default signature set.
pub fn is_crawler(user_agent: &str) -> bool {
    CrawlerSignatures::default().is_crawler(Some(user_agent))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHROME_DESKTOP: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";
    const SAFARI_IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Mobile/15E148 Safari/604.1";
    const FIREFOX_LINUX: &str =
        "Mozilla/5.0 (X11; Linux x86_64; rv:125.0) Gecko/20100101 Firefox/125.0";

    #[test]
    fn empty_user_agent_is_not_crawler() {
        assert!(!is_crawler(""));
    }

    #[test]
    fn missing_user_agent_is_not_crawler() {
        assert!(!CrawlerSignatures::default().is_crawler(None));
    }

    #[test]
    fn desktop_browsers_are_not_crawlers() {
        assert!(!is_crawler(CHROME_DESKTOP));
        assert!(!is_crawler(SAFARI_IPHONE));
        assert!(!is_crawler(FIREFOX_LINUX));
    }

    #[test]
    fn known_unfurlers_are_crawlers() {
        for ua in [
            "facebookexternalhit/1.1 (+http://www.facebook.com/externalhit_uatext.php)",
            "Twitterbot/1.0",
            "WhatsApp/2.23.20.0",
            "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)",
            "LinkedInBot/1.0 (compatible; Mozilla/5.0; Apache-HttpClient +http://www.linkedin.com)",
            "Slackbot-LinkExpanding 1.0 (+https://api.slack.com/robots)",
            "Mozilla/5.0 (compatible; Discordbot/2.0; +https://discordapp.com)",
            "TelegramBot (like TwitterBot)",
            "Pinterest/0.2 (+https://www.pinterest.com/bot.html)",
            "Mozilla/5.0 (compatible; bingbot/2.0; +http://www.bing.com/bingbot.htm)",
            "Mozilla/5.0 (compatible; YandexBot/3.0; +http://yandex.com/bots)",
            "Mozilla/5.0 (compatible; Baiduspider/2.0; +http://www.baidu.com/search/spider.html)",
        ] {
            assert!(is_crawler(ua), "expected crawler: {ua}");
        }
    }

    #[test]
    fn every_default_signature_matches_case_insensitively() {
        let sigs = CrawlerSignatures::default();
        for sig in DEFAULT_SIGNATURES {
            let upper = format!("Prefix {} Suffix", sig.to_uppercase());
            assert!(sigs.is_crawler(Some(&upper)), "signature {sig} did not match");
        }
    }

    #[test]
    fn generic_bot_matches_inside_words() {
        // No word boundary: anything containing "bot" counts.
        assert!(is_crawler("SomeRoBoTicBrowser/1.0"));
    }

    #[test]
    fn matching_reports_first_signature_in_order() {
        let sigs = CrawlerSignatures::default();
        assert_eq!(
            sigs.matching("facebookexternalhit/1.1"),
            Some("facebookexternalhit")
        );
        assert_eq!(sigs.matching("Twitterbot/1.0"), Some("twitterbot"));
        assert_eq!(sigs.matching(CHROME_DESKTOP), None);
    }

    #[test]
    fn new_normalizes_and_dedupes() {
        let sigs = CrawlerSignatures::new(["  FooBot ", "foobot", "", "   ", "Bar"]);
        assert_eq!(sigs.as_slice(), ["foobot".to_string(), "bar".to_string()]);
        assert_eq!(sigs.len(), 2);
    }

    #[test]
    fn with_extra_extends_defaults() {
        let base = CrawlerSignatures::default();
        let extended = base.clone().with_extra(["mastodon"]);
        assert_eq!(extended.len(), base.len() + 1);
        assert!(extended.is_crawler(Some("Mastodon/4.2.0 (http.rb/5.1.1; +https://example.social/)")));
        assert!(!base.is_crawler(Some("Mastodon/4.2.0 (http.rb/5.1.1)")));
    }

    #[test]
    fn with_extra_ignores_existing_entries() {
        let base = CrawlerSignatures::default();
        let extended = base.clone().with_extra(["BOT", "twitter"]);
        assert_eq!(extended, base);
    }

    #[test]
    fn empty_set_matches_nothing() {
        let sigs = CrawlerSignatures::new(Vec::<String>::new());
        assert!(sigs.is_empty());
        assert!(!sigs.is_crawler(Some("Twitterbot/1.0")));
    }
}
