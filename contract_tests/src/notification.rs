//! Notification center contracts
//!
//! Wire shape of a notification plus the documented lifecycle scenarios:
//! first id is 1, zero-duration toasts persist, manual removal beats a
//! scheduled expiry, and `clear` is never repopulated.

#[cfg(test)]
mod tests {
    use serde_json::json;
    use services_notification::{NotificationCenter, NotificationId, Toast};

    #[test]
    fn test_notification_wire_shape() {
        let mut center = NotificationCenter::new();
        center.insert_success("Saved");

        let wire = serde_json::to_value(&center.active()[0]).unwrap();
        assert_eq!(
            wire,
            json!({
                "id": 1,
                "kind": "success",
                "title": "Saved",
                "message": "",
                "durationMs": 5000
            })
        );
    }

    #[test]
    fn test_first_inserted_id_is_one() {
        let mut center = NotificationCenter::new();
        let id = center.insert_success("Saved");
        assert_eq!(id, NotificationId::from_raw(1));
    }

    #[test]
    fn test_zero_duration_survives_ten_seconds_idle() {
        let mut center = NotificationCenter::new();
        center.insert_success("Saved");
        let sticky = center.insert(Toast::new("X").with_duration_ms(0));
        assert_eq!(sticky, NotificationId::from_raw(2));

        center.advance_time(10_000);
        assert!(center.get(sticky).is_some());
    }

    #[test]
    fn test_manual_removal_beats_scheduled_expiry() {
        let mut center = NotificationCenter::new();
        center.insert_success("a");
        center.insert(Toast::new("b").with_duration_ms(0));
        let id = center.insert(Toast::new("c").with_duration_ms(100));
        assert_eq!(id, NotificationId::from_raw(3));

        center.advance_time(50);
        center.remove(id);
        assert!(center.get(id).is_none());

        // The +100ms deadline passes without touching anything else.
        let before: Vec<NotificationId> = center.active().iter().map(|n| n.id).collect();
        center.advance_time(50);
        let after: Vec<NotificationId> = center.active().iter().map(|n| n.id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_clear_is_final() {
        let mut center = NotificationCenter::new();
        center.insert(Toast::new("a").with_duration_ms(500));
        center.insert(Toast::new("b").with_duration_ms(1_500));

        center.clear();
        center.advance_time(2_000);
        assert!(center.is_empty());
    }
}
