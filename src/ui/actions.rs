/// Deferred UI state changes, queued by command listeners and applied by the
/// event loop once the current dispatch has finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    OpenPopup(String),
    ClosePopup,
    OpenPage(String),
    Quit,
}
