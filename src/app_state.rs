/// Which screen or modal currently owns the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Chat,
    ClearConfirm,
    QuitConfirm,
    Quit,
}
