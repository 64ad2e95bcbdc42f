use portfolio_core::{Catalog, CatalogError, Project, ProjectStatus};

fn record(id: &str, category: &str, technologies: &[&str], featured: bool) -> Project {
    Project {
        id: id.to_string(),
        title: format!("Title {id}"),
        description: format!("Description {id}"),
        category: category.to_string(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        image: format!("/images/{id}.png"),
        demo_url: None,
        github_url: None,
        featured,
        year: "2025".to_string(),
        status: ProjectStatus::Completed,
    }
}

fn small_catalog() -> Catalog {
    Catalog::new(
        vec![
            record("alpha", "Web Apps", &["Rust", "Axum"], true),
            record("beta", "Mobile Apps", &["Swift"], false),
            record("gamma", "Web Apps", &["Rust", "Postgres"], false),
        ],
        vec!["Web Apps".to_string(), "Mobile Apps".to_string()],
    )
    .unwrap()
}

#[test]
fn all_preserves_declaration_order() {
    let catalog = small_catalog();
    let ids: Vec<_> = catalog.all().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["alpha", "beta", "gamma"]);
}

#[test]
fn by_id_hit_and_miss() {
    let catalog = small_catalog();
    assert_eq!(catalog.by_id("beta").unwrap().category, "Mobile Apps");
    assert!(catalog.by_id("does-not-exist").is_none());
}

#[test]
fn by_category_preserves_order_and_matches_exactly() {
    let catalog = small_catalog();
    let web: Vec<_> = catalog
        .by_category("Web Apps")
        .into_iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(web, vec!["alpha", "gamma"]);
    assert!(catalog.by_category("web apps").is_empty());
}

#[test]
fn featured_returns_flagged_records_only() {
    let catalog = small_catalog();
    let ids: Vec<_> = catalog.featured().into_iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["alpha"]);
}

#[test]
fn all_technologies_is_sorted_and_deduplicated() {
    let catalog = small_catalog();
    assert_eq!(
        catalog.all_technologies(),
        vec!["Axum", "Postgres", "Rust", "Swift"]
    );
}

#[test]
fn duplicate_ids_fail_construction() {
    let err = Catalog::new(
        vec![
            record("twin", "Web Apps", &["Rust"], false),
            record("twin", "Mobile Apps", &["Swift"], false),
        ],
        vec!["Web Apps".to_string()],
    )
    .unwrap_err();
    assert_eq!(err, CatalogError::DuplicateId("twin".to_string()));
}

#[test]
fn builtin_catalog_is_valid_and_complete() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.len(), 19);
    assert_eq!(catalog.categories().len(), 7);

    let chowhub = catalog.by_id("chowhub").expect("chowhub exists");
    assert_eq!(chowhub.category, "Web Apps");
    assert!(chowhub.featured);

    assert!(catalog.by_id("does-not-exist").is_none());
}

#[test]
fn builtin_record_categories_are_published() {
    let catalog = Catalog::builtin();
    for project in catalog.all() {
        assert!(
            catalog.categories().contains(&project.category),
            "category `{}` of `{}` is not published",
            project.category,
            project.id
        );
    }
}

#[test]
fn builtin_featured_strip_is_ordered() {
    let catalog = Catalog::builtin();
    let ids: Vec<_> = catalog.featured().into_iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["chowhub", "sports-motion-detection", "clouddocs"]);
}

#[test]
fn builtin_technologies_have_no_duplicates() {
    let technologies = Catalog::builtin().all_technologies();
    let mut sorted = technologies.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(technologies, sorted);
    assert!(technologies.contains(&"Next.js".to_string()));
    assert!(technologies.contains(&"Linux".to_string()));
}
