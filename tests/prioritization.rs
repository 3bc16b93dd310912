use chrono::{NaiveDate, TimeZone, Utc};
use u_dss::dss::{normalize_score, PriorityEngine, RankedProject, UrgencyBadge};
use u_dss::project::{
    load_active_candidates, InMemoryStore, ProjectCandidate, ProjectId, ProjectRecord,
};
use u_dss::scoring::{MAX_PRIORITY_SCORE, MIN_PRIORITY_SCORE};

struct Fixture {
    id: &'static str,
    name: &'static str,
    deadline: i64,
    payment: i64,
    difficulty: i64,
    amount: f64,
    days: i64,
}

impl Fixture {
    fn new(id: &'static str, deadline: i64, payment: i64, difficulty: i64) -> Self {
        Self {
            id,
            name: id,
            deadline,
            payment,
            difficulty,
            amount: 0.0,
            days: 0,
        }
    }

    fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    fn amount(mut self, amount: f64) -> Self {
        self.amount = amount;
        self
    }

    fn days(mut self, days: i64) -> Self {
        self.days = days;
        self
    }

    fn build(self) -> ProjectCandidate {
        ProjectCandidate::builder(self.id, self.name, "Client")
            .with_deadline_score(self.deadline)
            .with_payment_score(self.payment)
            .with_difficulty_score(self.difficulty)
            .with_payment_amount(self.amount)
            .with_days_until_deadline(self.days)
            .build()
            .unwrap()
    }
}

fn ids(ranked: &[RankedProject]) -> Vec<&str> {
    ranked.iter().map(|r| r.candidate.id().as_str()).collect()
}

#[test]
fn normalization_bounds() {
    assert_eq!(normalize_score(i64::from(MAX_PRIORITY_SCORE)), 100);
    for score in MIN_PRIORITY_SCORE..=MAX_PRIORITY_SCORE {
        let n = normalize_score(i64::from(score));
        assert!((26..=100).contains(&n), "score {score} -> {n}");
    }
}

#[test]
fn highest_priority_ranks_first() {
    let engine = PriorityEngine::new();
    let input = vec![Fixture::new("low", 1, 1, 1).build(), Fixture::new("top", 5, 3, 3).build()];
    assert_eq!(ids(&engine.rank(&input)), vec!["top", "low"]);
}

#[test]
fn lowest_deadline_tier_prefers_fewer_days() {
    let engine = PriorityEngine::new();
    let input = vec![
        Fixture::new("later", 1, 2, 2).days(10).build(),
        Fixture::new("sooner", 1, 2, 2).days(3).build(),
    ];
    assert_eq!(ids(&engine.rank(&input)), vec!["sooner", "later"]);
}

#[test]
fn days_only_matter_in_lowest_deadline_tier() {
    let engine = PriorityEngine::new();
    // same triple, deadline tier 2: falls through to name
    let input = vec![
        Fixture::new("b", 2, 2, 2).named("Bravo").days(1).build(),
        Fixture::new("a", 2, 2, 2).named("Alpha").days(30).build(),
    ];
    assert_eq!(ids(&engine.rank(&input)), vec!["a", "b"]);
}

#[test]
fn top_payment_tier_prefers_larger_amount() {
    let engine = PriorityEngine::new();
    let input = vec![
        Fixture::new("small", 3, 3, 2).amount(5_000.0).build(),
        Fixture::new("large", 3, 3, 2).amount(9_000.0).build(),
    ];
    assert_eq!(ids(&engine.rank(&input)), vec!["large", "small"]);
}

#[test]
fn amount_only_matters_in_top_payment_tier() {
    let engine = PriorityEngine::new();
    let input = vec![
        Fixture::new("b", 3, 2, 2).named("Bravo").amount(9_000.0).build(),
        Fixture::new("a", 3, 2, 2).named("Alpha").amount(10.0).build(),
    ];
    assert_eq!(ids(&engine.rank(&input)), vec!["a", "b"]);
}

#[test]
fn lowest_tier_days_beat_payment_amount() {
    let engine = PriorityEngine::new();
    // both deadline 1 and payment 3: the days rule comes first
    let input = vec![
        Fixture::new("rich", 1, 3, 1).amount(50_000.0).days(20).build(),
        Fixture::new("soon", 1, 3, 1).amount(100.0).days(2).build(),
    ];
    assert_eq!(ids(&engine.rank(&input)), vec!["soon", "rich"]);
}

#[test]
fn equal_scores_fall_back_to_deadline_then_payment() {
    let engine = PriorityEngine::new();
    // 4*9 + 1*7 + 3*5 = 58 and 3*9 + 3*7 + 2*5 = 58
    let input = vec![
        Fixture::new("paid", 3, 3, 2).amount(99_999.0).build(),
        Fixture::new("urgent", 4, 1, 3).build(),
    ];
    let ranked = engine.rank(&input);
    assert_eq!(ranked[0].candidate.priority_score(), 58);
    assert_eq!(ranked[1].candidate.priority_score(), 58);
    assert_eq!(ids(&ranked), vec!["urgent", "paid"]);
}

#[test]
fn badge_only_for_single_deadline_winner() {
    let engine = PriorityEngine::new();
    let input = vec![
        Fixture::new("a", 3, 3, 2).build(),
        Fixture::new("b", 4, 1, 3).build(),
        Fixture::new("c", 3, 3, 2).build(),
    ];
    let badged = engine.assign_badges(&input);
    let badges: Vec<_> = badged.iter().map(|b| b.urgency_badge).collect();
    assert_eq!(badges, vec![None, Some(UrgencyBadge::UrgentDeadline), None]);

    let tied = vec![
        Fixture::new("a", 4, 1, 3).build(),
        Fixture::new("b", 4, 1, 3).build(),
        Fixture::new("c", 3, 3, 2).build(),
    ];
    assert!(engine
        .assign_badges(&tied)
        .iter()
        .all(|b| b.urgency_badge.is_none()));
}

#[test]
fn case_insensitive_name_tie_is_deterministic() {
    let engine = PriorityEngine::new();
    let input = vec![
        Fixture::new("2", 3, 2, 2).named("banner redesign").build(),
        Fixture::new("1", 3, 2, 2).named("Banner Redesign").build(),
    ];
    let first = engine.rank(&input);
    for _ in 0..5 {
        assert_eq!(engine.rank(&input), first);
    }
    // id decides once names fold to the same text
    assert_eq!(ids(&first), vec!["1", "2"]);
}

#[test]
fn empty_input() {
    let engine = PriorityEngine::new();
    assert!(engine.rank(&[]).is_empty());
    assert!(engine.assign_badges(&[]).is_empty());
    assert!(engine.rank_visible(&[], "anything").is_empty());
}

#[test]
fn reranking_ranked_list_keeps_order() {
    let engine = PriorityEngine::new();
    let input = vec![
        Fixture::new("a", 2, 3, 1).build(),
        Fixture::new("b", 1, 3, 1).days(4).amount(700.0).build(),
        Fixture::new("c", 3, 1, 2).build(),
        Fixture::new("d", 1, 3, 1).days(4).amount(900.0).build(),
        Fixture::new("e", 5, 2, 1).build(),
    ];
    let ranked = engine.rank(&input);
    let again: Vec<ProjectCandidate> = ranked.iter().map(|r| r.candidate.clone()).collect();
    assert_eq!(ids(&engine.rank(&again)), ids(&ranked));
}

#[test]
fn store_to_ranking_pipeline() {
    let now = Utc.with_ymd_and_hms(2025, 5, 1, 8, 0, 0).unwrap();
    let row = |id: i64, name: &str, d: i64, p: i64, f: i64, deadline: (i32, u32, u32), status: i64| {
        ProjectRecord {
            project_id: Some(ProjectId::from(id)),
            project_name: Some(name.to_owned()),
            client_name: Some("Initech".to_owned()),
            deadline_score: Some(d),
            payment_score: Some(p),
            difficulty_score: Some(f),
            payment_amount: Some(1_000.0),
            deadline: NaiveDate::from_ymd_opt(deadline.0, deadline.1, deadline.2),
            status_id: Some(status),
            ..ProjectRecord::default()
        }
    };

    let store = InMemoryStore::new()
        .with_record("dev", row(1, "Portfolio", 1, 2, 2, (2025, 6, 30), 1))
        .with_record("dev", row(2, "Dashboard", 1, 2, 2, (2025, 5, 20), 2))
        .with_record("dev", row(3, "Shipped", 5, 3, 3, (2025, 5, 2), 3))
        .with_record("dev", row(4, "Hotfix", 5, 2, 3, (2025, 5, 2), 1));

    let candidates = load_active_candidates(&store, "dev", now).unwrap();
    let engine = PriorityEngine::new();
    let ranked = engine.rank(&candidates);

    assert_eq!(ids(&ranked), vec!["4", "2", "1"]);
    assert_eq!(ranked[1].candidate.days_until_deadline(), 19);

    let text = ranked[0].explain().to_string();
    assert!(text.contains("Hotfix"));
    assert!(text.contains("category Due Tomorrow"));
}

#[test]
fn search_keeps_badges_from_full_list() {
    let engine = PriorityEngine::new();
    // 2*9 + 3*7 + 1*5 = 44 and 3*9 + 1*7 + 2*5 = 44
    let input = vec![
        Fixture::new("a", 2, 3, 1).named("Alpha").build(),
        Fixture::new("b", 3, 1, 2).named("Beta").build(),
        Fixture::new("c", 5, 3, 3).named("Beta Max").build(),
    ];
    let ranked = engine.rank_visible(&input, "beta");
    assert_eq!(ids(&ranked), vec!["c", "b"]);
    assert_eq!(ranked.iter().map(|r| r.rank).collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(ranked[0].urgency_badge, None);
    assert_eq!(ranked[1].urgency_badge, Some(UrgencyBadge::UrgentDeadline));
}
