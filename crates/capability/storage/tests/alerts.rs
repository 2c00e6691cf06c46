use chrono::{Duration, Utc};
use domain::{AlertSeverity, AlertType};
use std::collections::HashSet;
use terra_storage::{AlertRecord, AlertStore, InMemoryAlertStore, MockStore, NewAlert, SeedOptions};

fn new_alert(alert_type: AlertType, title: &str) -> NewAlert {
    NewAlert {
        alert_type,
        severity: AlertSeverity::Low,
        title: title.to_string(),
        description: "d".to_string(),
        location: "somewhere".to_string(),
    }
}

fn assert_newest_first(alerts: &[AlertRecord]) {
    assert!(
        alerts
            .windows(2)
            .all(|pair| pair[0].created_at >= pair[1].created_at)
    );
}

#[tokio::test]
async fn seeded_alerts_are_newest_first() {
    let store = MockStore::seeded(SeedOptions::default());
    let alerts = store.alerts.get_active_alerts().await;
    assert_eq!(alerts.len(), 4);
    assert_newest_first(&alerts);
    let ids: HashSet<i64> = alerts.iter().map(|alert| alert.id).collect();
    assert_eq!(ids.len(), 4);
    assert_eq!(alerts[0].title, "Temperature Spike");
    assert!(alerts.iter().all(|alert| alert.is_active));
}

#[tokio::test]
async fn created_alert_comes_first() {
    let store = MockStore::seeded(SeedOptions::default());
    let created = store
        .alerts
        .create_alert(new_alert(AlertType::Climate, "Heatwave"))
        .await;
    assert!(created.is_active);
    assert_eq!(created.id, 5);

    let alerts = store.alerts.get_active_alerts().await;
    assert_eq!(alerts.len(), 5);
    assert_eq!(alerts[0].id, created.id);
    assert_newest_first(&alerts);
}

#[tokio::test]
async fn alerts_by_type_filters_and_ignores_other_types() {
    let store = MockStore::seeded(SeedOptions::default());
    let before = store.alerts.get_alerts_by_type(AlertType::Forest).await;
    assert_eq!(before.len(), 1);

    store
        .alerts
        .create_alert(new_alert(AlertType::Marine, "Oil spill"))
        .await;
    let after = store.alerts.get_alerts_by_type(AlertType::Forest).await;
    assert_eq!(after, before);

    store
        .alerts
        .create_alert(new_alert(AlertType::Forest, "Fire"))
        .await;
    let forest = store.alerts.get_alerts_by_type(AlertType::Forest).await;
    assert_eq!(forest.len(), 2);
    assert!(
        forest
            .iter()
            .all(|alert| alert.alert_type == AlertType::Forest && alert.is_active)
    );
    assert_newest_first(&forest);
}

#[tokio::test]
async fn equal_timestamps_put_later_insert_first() {
    let store = InMemoryAlertStore::new();
    let at = Utc::now() - Duration::hours(1);
    let first = store.insert_at(new_alert(AlertType::Wildlife, "a"), at);
    let second = store.insert_at(new_alert(AlertType::Wildlife, "b"), at);

    let alerts = store.get_active_alerts().await;
    let ids: Vec<i64> = alerts.iter().map(|alert| alert.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}
