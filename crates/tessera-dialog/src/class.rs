#![forbid(unsafe_code)]

//! Class names carried by dialog nodes.
//!
//! Stylesheets target these; each role has its own name.

/// The dialog root.
pub const DIALOG: &str = "ts-Dialog";

/// Wrapper around header, body, and footer.
pub const CONTENT: &str = "ts-Dialog-content";

/// Header region.
pub const HEADER: &str = "ts-Dialog-header";

/// Title text inside the header.
pub const TITLE: &str = "ts-Dialog-title";

/// Close icon inside the header.
pub const CLOSE: &str = "ts-Dialog-close";

/// Body region.
pub const BODY: &str = "ts-Dialog-body";

/// Span wrapping a plain-text body.
pub const BODY_TEXT: &str = "ts-Dialog-bodyText";

/// Footer region holding the buttons.
pub const FOOTER: &str = "ts-Dialog-footer";

/// Every dialog button.
pub const BUTTON: &str = "ts-Dialog-button";

/// Icon node inside a button.
pub const BUTTON_ICON: &str = "ts-Dialog-buttonIcon";

/// Label node inside a button.
pub const BUTTON_TEXT: &str = "ts-Dialog-buttonText";

/// Extra class of the "OK" preset.
pub const OK_BUTTON: &str = "ts-Dialog-ok-button";

/// Extra class of the "Cancel" preset.
pub const CANCEL_BUTTON: &str = "ts-Dialog-cancel-button";

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [&str; 13] = [
        DIALOG,
        CONTENT,
        HEADER,
        TITLE,
        CLOSE,
        BODY,
        BODY_TEXT,
        FOOTER,
        BUTTON,
        BUTTON_ICON,
        BUTTON_TEXT,
        OK_BUTTON,
        CANCEL_BUTTON,
    ];

    #[test]
    fn names_are_distinct() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn names_share_the_dialog_prefix() {
        assert!(ALL.iter().all(|c| c.starts_with(DIALOG)));
    }
}
