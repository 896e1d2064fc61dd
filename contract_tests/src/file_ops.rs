//! File operations contracts
//!
//! Wire shapes of the response models, the fixed fallback messages, and the
//! documented wiring between a failed operation and an error toast: the
//! gateway surfaces exactly one message, and the caller decides to display
//! it.

#[cfg(test)]
mod tests {
    use crate::test_helpers::{bare_entry, sample_entry};
    use serde_json::json;
    use services_file_ops::{
        DeleteAck, FileContent, FileDetails, FileGateway, FileListing, FileProvider,
        ProviderError,
    };
    use services_notification::{NotificationCenter, NotificationKind, Toast};

    /// Provider that fails every call, optionally with a message
    struct FailingProvider {
        message: Option<&'static str>,
    }

    impl FailingProvider {
        fn error(&self) -> ProviderError {
            match self.message {
                Some(msg) => ProviderError::Service(msg.to_string()),
                None => ProviderError::Unavailable,
            }
        }
    }

    impl FileProvider for FailingProvider {
        fn list_files(&self, _path: &str) -> Result<FileListing, ProviderError> {
            Err(self.error())
        }

        fn file_details(&self, _path: &str) -> Result<FileDetails, ProviderError> {
            Err(self.error())
        }

        fn open_file(&self, _path: &str) -> Result<FileContent, ProviderError> {
            Err(self.error())
        }

        fn delete_file(&mut self, _path: &str) -> Result<DeleteAck, ProviderError> {
            Err(self.error())
        }
    }

    #[test]
    fn test_file_entry_wire_shape() {
        let wire = serde_json::to_value(sample_entry()).unwrap();
        assert_eq!(
            wire,
            json!({
                "name": "notes.md",
                "path": "/docs/notes.md",
                "isDir": false,
                "fileType": "file",
                "size": 512,
                "modTimeMs": 1_700_000_000_000u64,
                "permissions": "-rw-r--r--",
                "extension": "md",
                "mimeType": "text/markdown"
            })
        );
    }

    #[test]
    fn test_file_entry_optionals_are_omitted() {
        let wire = serde_json::to_value(bare_entry()).unwrap();
        let obj = wire.as_object().unwrap();
        assert!(!obj.contains_key("extension"));
        assert!(!obj.contains_key("mimeType"));
    }

    #[test]
    fn test_file_listing_wire_shape() {
        let listing = FileListing::from_items("/docs", vec![sample_entry()]);
        let wire = serde_json::to_value(&listing).unwrap();

        assert_eq!(wire["path"], "/docs");
        assert_eq!(wire["totalItems"], 1);
        assert_eq!(wire["totalSize"], 512);
        assert_eq!(wire["items"][0]["name"], "notes.md");
    }

    #[test]
    fn test_file_content_wire_shape() {
        let content = FileContent {
            name: "notes.md".to_string(),
            path: "/docs/notes.md".to_string(),
            content: "# Notes".to_string(),
            size: 7,
            mime_type: "text/markdown".to_string(),
            encoding: "utf-8".to_string(),
        };

        let wire = serde_json::to_value(&content).unwrap();
        assert_eq!(wire["mimeType"], "text/markdown");
        assert_eq!(wire["encoding"], "utf-8");
    }

    #[test]
    fn test_fallback_messages_are_fixed_strings() {
        let mut gateway = FileGateway::new(FailingProvider { message: None });

        assert_eq!(
            gateway.list_files("/").unwrap_err().message(),
            "Failed to list files"
        );
        assert_eq!(
            gateway.file_details("/x").unwrap_err().message(),
            "Failed to get file details"
        );
        assert_eq!(
            gateway.open_file("/x").unwrap_err().message(),
            "Failed to open file"
        );
        assert_eq!(
            gateway.delete_file("/x").unwrap_err().message(),
            "Failed to delete file"
        );
    }

    #[test]
    fn test_failure_is_displayed_as_error_toast_by_the_caller() {
        let mut gateway = FileGateway::new(FailingProvider {
            message: Some("permission denied: /etc/shadow"),
        });
        let mut center = NotificationCenter::new();

        // The gateway does not touch the notification center on its own;
        // the caller wires the surfaced message into a toast.
        if let Err(err) = gateway.delete_file("/etc/shadow") {
            center.insert(Toast::error("Delete failed").with_message(err.message()));
        }

        assert_eq!(center.len(), 1);
        let toast = &center.active()[0];
        assert_eq!(toast.kind, NotificationKind::Error);
        assert_eq!(toast.title, "Delete failed");
        assert_eq!(toast.message, "permission denied: /etc/shadow");
    }
}
