//! Profile action menu state.
//!
//! The menu exposes a single destructive action. Choosing it only opens the
//! confirmation dialog; the dialog is built on first use and the menu itself
//! never talks to the network.

/// Label of the only menu entry.
pub const DELETE_ACCOUNT_LABEL: &str = "Delete Account";

/// Visibility of the delete-account confirmation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeleteDialog {
    #[default]
    Hidden,
    Open,
    /// The user confirmed and the deletion request is in flight.
    Deleting,
}

/// Parameters forwarded to the confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfirmation<'a> {
    pub display_name: &'a str,
    pub user_id: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileMenu {
    display_name: String,
    user_id: String,
    dialog: DeleteDialog,
    /// Set the first time the dialog is opened and never cleared.
    dialog_loaded: bool,
    error: Option<String>,
}

impl ProfileMenu {
    pub fn new(display_name: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            user_id: user_id.into(),
            dialog: DeleteDialog::Hidden,
            dialog_loaded: false,
            error: None,
        }
    }

    pub fn dialog(&self) -> DeleteDialog {
        self.dialog
    }

    pub fn is_dialog_visible(&self) -> bool {
        self.dialog != DeleteDialog::Hidden
    }

    /// Whether the confirmation dialog has ever been needed.
    pub fn is_dialog_loaded(&self) -> bool {
        self.dialog_loaded
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The "Delete Account" entry was chosen.
    pub fn select_delete_account(&mut self) {
        if self.dialog == DeleteDialog::Hidden {
            self.dialog = DeleteDialog::Open;
            self.error = None;
        }
        self.dialog_loaded = true;
    }

    /// Props for the dialog, present only while it is visible.
    pub fn confirmation(&self) -> Option<DeleteConfirmation<'_>> {
        self.is_dialog_visible().then_some(DeleteConfirmation {
            display_name: &self.display_name,
            user_id: &self.user_id,
        })
    }

    /// Closes the dialog. Ignored while a deletion is in flight.
    pub fn cancel(&mut self) {
        if self.dialog == DeleteDialog::Open {
            self.dialog = DeleteDialog::Hidden;
        }
    }

    /// The user confirmed. Returns `false` if there was nothing to confirm.
    pub fn begin_delete(&mut self) -> bool {
        if self.dialog == DeleteDialog::Open {
            self.dialog = DeleteDialog::Deleting;
            self.error = None;
            true
        } else {
            false
        }
    }

    /// The deletion request failed; the dialog stays open with the error.
    pub fn delete_failed(&mut self, message: impl Into<String>) {
        if self.dialog == DeleteDialog::Deleting {
            self.dialog = DeleteDialog::Open;
        }
        self.error = Some(message.into());
    }

    /// The deletion request succeeded.
    pub fn delete_finished(&mut self) {
        self.dialog = DeleteDialog::Hidden;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialog_is_not_loaded_until_first_use() {
        let mut menu = ProfileMenu::new("ada", "u1");
        assert!(!menu.is_dialog_loaded());
        assert!(menu.confirmation().is_none());

        menu.select_delete_account();
        assert!(menu.is_dialog_loaded());
        assert_eq!(
            menu.confirmation(),
            Some(DeleteConfirmation {
                display_name: "ada",
                user_id: "u1"
            })
        );
    }

    #[test]
    fn cancel_hides_but_keeps_dialog_loaded() {
        let mut menu = ProfileMenu::new("ada", "u1");
        menu.select_delete_account();
        menu.cancel();

        assert_eq!(menu.dialog(), DeleteDialog::Hidden);
        assert!(menu.is_dialog_loaded());
    }

    #[test]
    fn deleting_cannot_be_cancelled() {
        let mut menu = ProfileMenu::new("ada", "u1");
        menu.select_delete_account();
        assert!(menu.begin_delete());
        menu.cancel();
        assert_eq!(menu.dialog(), DeleteDialog::Deleting);
        assert!(!menu.begin_delete());
    }

    #[test]
    fn failure_reopens_with_error() {
        let mut menu = ProfileMenu::new("ada", "u1");
        menu.select_delete_account();
        menu.begin_delete();
        menu.delete_failed("API returned status: 500");

        assert_eq!(menu.dialog(), DeleteDialog::Open);
        assert_eq!(menu.error(), Some("API returned status: 500"));

        menu.begin_delete();
        menu.delete_finished();
        assert_eq!(menu.dialog(), DeleteDialog::Hidden);
        assert!(menu.error().is_none());
    }

    #[test]
    fn begin_delete_requires_open_dialog() {
        let mut menu = ProfileMenu::new("ada", "u1");
        assert!(!menu.begin_delete());
    }
}
