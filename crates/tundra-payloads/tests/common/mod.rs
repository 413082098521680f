use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde_json::{json, Map};
use tundra_model::{
    CustomAttributeDef, CustomAttributeValues, Issue, IssueStatus, IssueType, Milestone, Priority,
    Project, RolePoints, Severity, Task, TaskStatus, User, UserStory, UserStoryStatus, Webhook,
    WebhookLog, WikiPage,
};

/// Fixed creation timestamp shared by the fixtures
#[allow(dead_code)]
pub fn created() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 4, 9, 30, 0).unwrap()
}

/// Fixed modification timestamp shared by the fixtures
#[allow(dead_code)]
pub fn modified() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 6, 15, 0, 0).unwrap()
}

#[allow(dead_code)]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Project with one custom attribute definition per kind
#[allow(dead_code)]
pub fn project() -> Project {
    let mut project = Project::new(1, "tundra-backend", "Tundra Backend");
    project.logo_big_url = Some("https://media.example.com/p/1/logo-big.png".to_string());
    project.userstory_attributes = vec![
        CustomAttributeDef::new(14, "Branch"),
        CustomAttributeDef::new(15, "Reviewer"),
    ];
    project.task_attributes = vec![CustomAttributeDef::new(21, "Runbook")];
    project.issue_attributes = vec![CustomAttributeDef::new(33, "Reported by")];
    project
}

/// User with an uploaded portrait
#[allow(dead_code)]
pub fn freyja() -> User {
    let mut user = User::new(7, "freyja", "Freyja Vanadis", "freyja@example.com");
    user.photo = Some("https://media.example.com/u/7.png".to_string());
    user
}

/// User without an uploaded portrait
#[allow(dead_code)]
pub fn loki() -> User {
    User::new(8, "loki", "Loki Laufeyson", "loki@example.com")
}

#[allow(dead_code)]
pub fn story_status() -> UserStoryStatus {
    UserStoryStatus {
        id: 10,
        name: "In progress".to_string(),
        slug: "in-progress".to_string(),
        color: "#ff9900".to_string(),
        is_closed: false,
        is_archived: false,
    }
}

#[allow(dead_code)]
pub fn task_status() -> TaskStatus {
    TaskStatus {
        id: 20,
        name: "Ready for test".to_string(),
        slug: "ready-for-test".to_string(),
        color: "#fcc000".to_string(),
        is_closed: false,
    }
}

#[allow(dead_code)]
pub fn issue_status() -> IssueStatus {
    IssueStatus {
        id: 30,
        name: "New".to_string(),
        slug: "new".to_string(),
        color: "#999999".to_string(),
        is_closed: false,
    }
}

#[allow(dead_code)]
pub fn milestone() -> Milestone {
    let mut milestone = Milestone::new(
        3,
        "Sprint 4",
        "sprint-4",
        date(2024, 3, 4),
        date(2024, 3, 18),
        project(),
    );
    milestone.created_date = created();
    milestone.modified_date = modified();
    milestone.disponibility = Some(30.0);
    milestone.owner = Some(freyja());
    milestone
}

/// Fully populated story: scheduled, estimated, assigned, with values row
#[allow(dead_code)]
pub fn full_story() -> UserStory {
    let mut story = UserStory::new(31, 42, "Improve onboarding flow", story_status(), project());
    story.created_date = created();
    story.modified_date = modified();
    story.watchers = vec![7, 8];
    story.tags = vec!["onboarding".to_string(), "ux".to_string()];
    story.client_requirement = true;
    story.points = vec![
        RolePoints::new("UX", "2", Some(2.0)),
        RolePoints::new("Back", "?", None),
    ];
    story.owner = Some(freyja());
    story.assigned_to = Some(loki());
    story.milestone = Some(milestone());
    let mut doc = Map::new();
    doc.insert("14".to_string(), json!("release/4.2"));
    story.custom_attributes = Some(CustomAttributeValues::new(doc));
    story
}

#[allow(dead_code)]
pub fn full_task() -> Task {
    let mut task = Task::new(91, 17, "Wire up login endpoint", task_status(), project());
    task.created_date = created();
    task.modified_date = modified();
    task.us_order = 1;
    task.taskboard_order = 4;
    task.description = "Hook the form up to the session API.".to_string();
    task.tags = vec!["auth".to_string()];
    task.watchers = vec![7];
    task.owner = Some(freyja());
    task.assigned_to = Some(freyja());
    task.user_story = Some(full_story());
    task.milestone = Some(milestone());
    task
}

#[allow(dead_code)]
pub fn full_issue() -> Issue {
    let mut issue = Issue::new(
        55,
        101,
        "Crash when saving empty form",
        issue_status(),
        IssueType {
            id: 1,
            name: "Bug".to_string(),
            color: "#cc0000".to_string(),
        },
        Priority {
            id: 2,
            name: "High".to_string(),
            color: "#ff5500".to_string(),
        },
        Severity {
            id: 3,
            name: "Important".to_string(),
            color: "#ffa500".to_string(),
        },
        project(),
    );
    issue.created_date = created();
    issue.modified_date = modified();
    issue.description = "Steps: open the form, press save.".to_string();
    issue.tags = vec!["forms".to_string()];
    issue.watchers = vec![8];
    issue.owner = Some(loki());
    issue.assigned_to = Some(freyja());
    let mut doc = Map::new();
    doc.insert("33".to_string(), json!("support"));
    issue.custom_attributes = Some(CustomAttributeValues::new(doc));
    issue
}

#[allow(dead_code)]
pub fn wiki_page() -> WikiPage {
    let mut page = WikiPage::new(5, "home", "# Welcome\n\nStart here.", project());
    page.created_date = created();
    page.modified_date = modified();
    page.version = 3;
    page.owner = Some(freyja());
    page.last_modifier = Some(loki());
    page
}

#[allow(dead_code)]
pub fn webhook_with_logs() -> Webhook {
    let mut webhook = Webhook::new(4, 1, "CI notifier", "https://ci.example.com/hook", "s3cret");
    let mut request_headers = Map::new();
    request_headers.insert("Content-Type".to_string(), json!("application/json"));
    webhook.logs.push(WebhookLog {
        id: 40,
        webhook_id: 4,
        url: webhook.url.clone(),
        status: 200,
        request_data: json!({ "action": "create", "type": "userstory" }),
        request_headers,
        response_data: "ok".to_string(),
        response_headers: Map::new(),
        duration: 0.21,
        created: modified(),
    });
    webhook
}
