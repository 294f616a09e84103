use parking_lot::Mutex;

/// Navigation surface the redirect flow drives.
///
/// Both operations are fire-and-forget: the flow never inspects a result
/// and has no further step after invoking them.
pub trait Navigator: Send + Sync + 'static {
    /// Navigates back to the home view, replacing the current history
    /// entry. Used on the failure paths.
    fn home_replace(&self);

    /// Performs a full navigation to the original URL. Used on success.
    fn redirect(&self, url: &str);
}

/// One navigation performed through a [`RecordingNavigator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    HomeReplace,
    Redirect(String),
}

/// A navigator that records what it was asked to do.
///
/// Used by tests and by embedders that have no real navigation surface.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    actions: Mutex<Vec<Navigation>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the navigations performed so far, in order.
    pub fn actions(&self) -> Vec<Navigation> {
        self.actions.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn home_replace(&self) {
        self.actions.lock().push(Navigation::HomeReplace);
    }

    fn redirect(&self, url: &str) {
        self.actions.lock().push(Navigation::Redirect(url.to_owned()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_navigator_keeps_order() {
        let nav = RecordingNavigator::new();
        nav.home_replace();
        nav.redirect("https://example.com");

        assert_eq!(
            nav.actions(),
            vec![
                Navigation::HomeReplace,
                Navigation::Redirect("https://example.com".to_owned())
            ]
        );
    }
}
