//! Host UI service ports (dialogs, notifications, localization).

use async_trait::async_trait;

use super::types::{ConfirmRequest, NotificationLevel};

/// Modal yes/no prompt.
///
/// Awaiting the answer must not block other UI activity; there is no timeout.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConfirmPort: Send + Sync {
    async fn confirm(&self, request: ConfirmRequest) -> bool;
}

/// Fire-and-forget user notification.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationPort: Send + Sync {
    fn notify(&self, level: NotificationLevel, message: &str);
}

/// Key to user-facing string. Pure; unknown keys come back unchanged.
#[cfg_attr(test, mockall::automock)]
pub trait LocalizationPort: Send + Sync {
    fn localize(&self, key: &str) -> String;
}

/// Localize `key` and substitute `{placeholder}` tokens.
pub fn format_localized(
    localization: &dyn LocalizationPort,
    key: &str,
    args: &[(&str, &str)],
) -> String {
    args.iter()
        .fold(localization.localize(key), |text, (placeholder, value)| {
            text.replace(&format!("{{{}}}", placeholder), value)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_substitutes_every_placeholder() {
        let mut localization = MockLocalizationPort::new();
        localization
            .expect_localize()
            .returning(|_| "Overwrite {name}? {name} will be replaced.".to_string());

        let text = format_localized(&localization, "any", &[("name", "burst")]);

        assert_eq!(text, "Overwrite burst? burst will be replaced.");
    }
}
