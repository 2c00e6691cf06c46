use domain::{ProjectStatus, ProjectType};
use terra_storage::{MockStore, NewProject, ProjectStore, SeedOptions};

fn new_project(name: &str, project_type: ProjectType) -> NewProject {
    NewProject {
        name: name.to_string(),
        description: "Y".to_string(),
        project_type,
        lead_researcher_id: None,
    }
}

#[tokio::test]
async fn seed_has_four_projects_led_by_researcher() {
    let store = MockStore::seeded(SeedOptions::default());
    let projects = store.projects.get_projects().await;
    assert_eq!(projects.len(), 4);
    assert_eq!(projects[0].name, "Amazon Basin Analysis");
    assert_eq!(projects[3].participants, 20);
    assert!(projects.iter().all(|p| p.lead_researcher_id == Some(1)));
    assert!(projects.iter().all(|p| p.status == ProjectStatus::Active));
}

#[tokio::test]
async fn create_wildlife_project() {
    let store = MockStore::seeded(SeedOptions::default());
    let before = store
        .projects
        .get_projects_by_type(ProjectType::Wildlife)
        .await
        .len();

    let created = store
        .projects
        .create_project(new_project("X", ProjectType::Wildlife))
        .await;
    assert_eq!(created.participants, 0);
    assert_eq!(created.status, ProjectStatus::Active);
    assert!(created.lead_researcher_id.is_none());
    assert!(created.data.is_none());

    assert_eq!(store.projects.get_projects().await.len(), 5);
    let wildlife = store
        .projects
        .get_projects_by_type(ProjectType::Wildlife)
        .await;
    assert_eq!(wildlife.len(), before + 1);
    assert!(wildlife.iter().all(|p| p.project_type == ProjectType::Wildlife));
}

#[tokio::test]
async fn created_projects_get_ascending_ids_in_order() {
    let store = MockStore::seeded(SeedOptions::default());
    let mut created = Vec::new();
    for (index, project_type) in ProjectType::ALL.iter().enumerate() {
        let project = store
            .projects
            .create_project(new_project(&format!("p{index}"), *project_type))
            .await;
        created.push(project);
    }

    let projects = store.projects.get_projects().await;
    assert_eq!(projects.len(), 4 + created.len());
    assert!(projects.windows(2).all(|pair| pair[0].id < pair[1].id));
    assert_eq!(&projects[4..], created.as_slice());
}

#[tokio::test]
async fn lead_researcher_is_kept() {
    let store = MockStore::empty();
    let mut input = new_project("Kelp", ProjectType::Marine);
    input.lead_researcher_id = Some(42);
    let project = store.projects.create_project(input).await;
    assert_eq!(project.id, 1);
    assert_eq!(project.lead_researcher_id, Some(42));
}
