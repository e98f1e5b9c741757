
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

/// Where contact and newsletter submissions go. Set `TALENTPRO_SUBMIT_URL`
/// at build time to post to a real endpoint; without it submissions are
/// simulated locally.
pub fn submission_endpoint() -> Option<String> {
    resolve_endpoint(option_env!("TALENTPRO_SUBMIT_URL"))
}

/// Absolute URLs are used as given; anything else is a path on the backend.
pub fn resolve_endpoint(raw: Option<&str>) -> Option<String> {
    raw.map(|path| {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.trim_end_matches('/').to_string()
        } else {
            format!("{}{}", get_backend_url(), path.trim_end_matches('/'))
        }
    })
}

// Scroll offset past which the nav switches to its solid look.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;
// Extra gap kept above an anchor target after smooth scrolling.
pub const ANCHOR_SCROLL_GAP: f64 = 20.0;
pub const NAV_RECHECK_DELAY_MS: u32 = 100;
pub const HERO_REVEAL_DELAY_MS: u32 = 300;

pub const CONTACT_SIMULATED_DELAY_MS: u32 = 2_000;
pub const NEWSLETTER_SIMULATED_DELAY_MS: u32 = 1_500;
pub const SUBMIT_TIMEOUT_MS: u32 = 10_000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_endpoint_means_simulated() {
        assert_eq!(resolve_endpoint(None), None);
        if option_env!("TALENTPRO_SUBMIT_URL").is_none() {
            assert_eq!(submission_endpoint(), None);
        }
    }

    #[test]
    fn absolute_endpoint_drops_trailing_slash() {
        assert_eq!(
            resolve_endpoint(Some("https://forms.example.com/api/")).as_deref(),
            Some("https://forms.example.com/api")
        );
        assert_eq!(resolve_endpoint(Some("http://10.0.0.2:8080")).as_deref(), Some("http://10.0.0.2:8080"));
    }

    #[test]
    fn relative_endpoint_hangs_off_the_backend() {
        assert_eq!(
            resolve_endpoint(Some("/api/forms/")),
            Some(format!("{}/api/forms", get_backend_url()))
        );
    }
}
