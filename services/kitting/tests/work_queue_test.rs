//! 工作队列分类与仪表盘聚合测试

use chrono::Utc;
use kitting::domain::entities::{OrderLine, WorkQueue};
use kitting::domain::services::dashboard::DashboardSummary;
use kitting_common::{OrderLineId, ScheduleId};

fn line(id: i64, prekitted: bool, verified: Option<bool>) -> OrderLine {
    OrderLine {
        id: OrderLineId(id),
        schedule_id: ScheduleId::new(),
        sku: format!("SKU-{}", id),
        description: "Mesa de noche".to_string(),
        quantity: 2,
        manufacturing_order: format!("OF-{:03}", id),
        prekitted,
        verified,
        created_at: Utc::now(),
    }
}

// ============================================================================
// 分类表
// ============================================================================

#[test]
fn test_classification_table() {
    let cases = [
        (false, None, WorkQueue::PendingPrekitting),
        (false, Some(false), WorkQueue::PendingPrekitting),
        (true, None, WorkQueue::PendingVerification),
        (true, Some(false), WorkQueue::PendingVerification),
        (true, Some(true), WorkQueue::Finalized),
    ];

    for (prekitted, verified, expected) in cases {
        assert_eq!(
            WorkQueue::classify(prekitted, verified),
            expected,
            "prekitted={} verified={:?}",
            prekitted,
            verified
        );
    }
}

#[test]
fn test_verified_without_prekitted_stays_in_prekitting_queue() {
    // 只能由外部直接改库产生的组合，不能跳过预拣配
    assert_eq!(
        WorkQueue::classify(false, Some(true)),
        WorkQueue::PendingPrekitting
    );
    assert!(!line(1, false, Some(true)).is_finalized());
}

// ============================================================================
// 状态转换
// ============================================================================

#[test]
fn test_mark_prekitted_moves_line_to_verification_queue() {
    let mut l = line(1, false, None);
    assert_eq!(l.queue(), WorkQueue::PendingPrekitting);

    l.mark_prekitted();
    assert_eq!(l.queue(), WorkQueue::PendingVerification);
}

#[test]
fn test_mark_verified_requires_prekitted() {
    let mut l = line(1, false, None);
    assert!(l.mark_verified().is_err());
    assert_eq!(l.verified, None);

    l.mark_prekitted();
    l.mark_verified().unwrap();
    assert!(l.is_finalized());
}

// ============================================================================
// 仪表盘聚合
// ============================================================================

#[test]
fn test_dashboard_counts_partition_the_lines() {
    let lines = vec![
        line(1, false, None),
        line(2, false, Some(true)),
        line(3, true, None),
        line(4, true, Some(false)),
        line(5, true, Some(true)),
        line(6, true, Some(true)),
    ];

    let summary = DashboardSummary::from_lines(&lines);
    assert_eq!(summary.total, 6);
    assert_eq!(summary.pending_prekitting, 2);
    assert_eq!(summary.to_verify, 2);
    assert_eq!(summary.finalized, 2);
    assert_eq!(
        summary.pending_prekitting + summary.to_verify + summary.finalized,
        summary.total
    );
}

#[test]
fn test_dashboard_of_empty_floor_is_all_zero() {
    assert_eq!(DashboardSummary::from_lines(&[]), DashboardSummary::default());
}
