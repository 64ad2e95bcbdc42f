use portfolio_core::{Project, ProjectStatus, ProjectValidationError};

fn sample() -> Project {
    Project {
        id: "chowhub".to_string(),
        title: "ChowHub - Restaurant Management System".to_string(),
        description: "Full-stack restaurant management system".to_string(),
        category: "Web Apps".to_string(),
        technologies: vec!["Next.js".to_string(), "MongoDB".to_string()],
        image: "/images/projects/chowhub.png".to_string(),
        demo_url: Some("https://chowhub.vercel.app/".to_string()),
        github_url: Some("https://github.com/most4f4/chowhub".to_string()),
        featured: true,
        year: "2025".to_string(),
        status: ProjectStatus::Completed,
    }
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let mut project = sample();
    project.status = ProjectStatus::InProgress;

    let json = serde_json::to_value(&project).unwrap();
    assert_eq!(json["id"], "chowhub");
    assert_eq!(json["demoUrl"], "https://chowhub.vercel.app/");
    assert_eq!(json["githubUrl"], "https://github.com/most4f4/chowhub");
    assert_eq!(json["status"], "in-progress");
    assert_eq!(json["featured"], true);

    let decoded: Project = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, project);
}

#[test]
fn optional_fields_default_when_absent() {
    let decoded: Project = serde_json::from_value(serde_json::json!({
        "id": "bookworm",
        "title": "Bookworm",
        "description": "Book sharing app",
        "category": "Mobile Apps",
        "technologies": ["React Native"],
        "image": "/images/projects/bookworm.png",
        "year": "2025",
        "status": "completed",
    }))
    .unwrap();

    assert_eq!(decoded.demo_url, None);
    assert_eq!(decoded.github_url, None);
    assert!(!decoded.featured);
    assert_eq!(decoded.status, ProjectStatus::Completed);
}

#[test]
fn absent_optional_links_are_not_serialized() {
    let mut project = sample();
    project.demo_url = None;
    project.github_url = None;

    let json = serde_json::to_value(&project).unwrap();
    assert!(json.get("demoUrl").is_none());
    assert!(json.get("githubUrl").is_none());
}

#[test]
fn validation_rejects_bad_slug_and_empty_fields() {
    let mut project = sample();
    project.id = "Chow Hub".to_string();
    assert!(matches!(
        project.validate().unwrap_err(),
        ProjectValidationError::InvalidId(_)
    ));

    let mut project = sample();
    project.year = String::new();
    assert_eq!(
        project.validate().unwrap_err(),
        ProjectValidationError::EmptyField("year")
    );
}

#[test]
fn validation_error_messages_name_the_problem() {
    let err = ProjectValidationError::InvalidId("Chow Hub".to_string());
    assert!(err.to_string().contains("Chow Hub"));

    let err = ProjectValidationError::EmptyField("title");
    assert!(err.to_string().contains("title"));
}
