#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
    use studydesk::db::storage::{MemoryStorage, Storage};
    use studydesk::db::tasks::{Tasks, TASKS_KEY};
    use studydesk::libs::task::{Priority, TaskError, TaskInput, TaskType};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap()
    }

    fn due(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn slot(tasks: &Tasks<MemoryStorage>) -> Option<String> {
        tasks.storage().get(TASKS_KEY).unwrap()
    }

    fn assert_completion_invariant(tasks: &Tasks<MemoryStorage>) {
        for task in tasks.all() {
            assert_eq!(task.completed, task.completed_at.is_some(), "task {}", task.id);
        }
    }

    #[test]
    fn test_load_empty_slot() {
        let tasks = Tasks::load(MemoryStorage::new(), now()).unwrap();

        assert!(tasks.is_empty());
        assert_eq!(tasks.outcome().purged, 0);
        assert!(!tasks.outcome().recovered_from_corruption);
        // Nothing to purge, so nothing is written
        assert_eq!(slot(&tasks), None);
    }

    #[test]
    fn test_create_persists_exact_layout() {
        let mut tasks = Tasks::load(MemoryStorage::new(), now()).unwrap();

        let input = TaskInput::new(TaskType::Exam, "Midterm", due(20, 14, 30))
            .subject("Math")
            .priority(Priority::High);
        let task = tasks.create(input, now()).unwrap();

        assert_eq!(task.id, "1705309200000");
        assert_eq!(
            slot(&tasks).unwrap(),
            r#"[{"id":"1705309200000","type":"exam","title":"Midterm","subject":"Math","dueDate":"2024-01-20T14:30:00","priority":"high","notes":"","completed":false,"createdAt":"2024-01-15T09:00:00.000Z"}]"#
        );
    }

    #[test]
    fn test_create_trims_fields() {
        let mut tasks = Tasks::load(MemoryStorage::new(), now()).unwrap();

        let input = TaskInput::new(TaskType::Homework, "  Essay  ", due(16, 23, 59))
            .subject(" History ")
            .notes("  two pages ");
        let task = tasks.create(input, now()).unwrap();

        assert_eq!(task.title, "Essay");
        assert_eq!(task.subject, "History");
        assert_eq!(task.notes, "two pages");
        assert!(!task.completed);
        assert_eq!(task.completed_at, None);
        assert_eq!(task.created_at, now());
    }

    #[test]
    fn test_create_rejects_blank_title() {
        let mut tasks = Tasks::load(MemoryStorage::new(), now()).unwrap();

        let result = tasks.create(TaskInput::new(TaskType::Quiz, "   ", due(16, 9, 0)), now());

        assert!(matches!(result, Err(TaskError::Validation(_))));
        assert!(tasks.is_empty());
        assert_eq!(slot(&tasks), None);
    }

    #[test]
    fn test_create_keeps_ids_unique() {
        let mut tasks = Tasks::load(MemoryStorage::new(), now()).unwrap();

        let first = tasks
            .create(TaskInput::new(TaskType::Homework, "One", due(16, 9, 0)), now())
            .unwrap();
        let second = tasks
            .create(TaskInput::new(TaskType::Homework, "Two", due(16, 9, 0)), now())
            .unwrap();

        assert_eq!(first.id, "1705309200000");
        assert_eq!(second.id, "1705309200001");
        assert_eq!(tasks.len(), 2);
    }

    #[test]
    fn test_update_replaces_editable_fields() {
        let mut tasks = Tasks::load(MemoryStorage::new(), now()).unwrap();
        let task = tasks
            .create(TaskInput::new(TaskType::Homework, "Draft", due(16, 9, 0)), now())
            .unwrap();

        let input = TaskInput::new(TaskType::Exam, "Final", due(22, 10, 0))
            .subject("Physics")
            .priority(Priority::Low)
            .notes("room 101");
        let updated = tasks.update(&task.id, input).unwrap();

        assert_eq!(updated.id, task.id);
        assert_eq!(updated.created_at, task.created_at);
        assert_eq!(updated.task_type, TaskType::Exam);
        assert_eq!(updated.title, "Final");
        assert_eq!(updated.subject, "Physics");
        assert_eq!(updated.due_date, due(22, 10, 0));
        assert_eq!(updated.priority, Priority::Low);
        assert_eq!(updated.notes, "room 101");

        // Written through
        let reloaded = Tasks::load(tasks.storage().clone(), now()).unwrap();
        assert_eq!(reloaded.get(&task.id), Some(&updated));
    }

    #[test]
    fn test_update_missing_id_changes_nothing() {
        let mut tasks = Tasks::load(MemoryStorage::new(), now()).unwrap();
        tasks
            .create(TaskInput::new(TaskType::Homework, "Keep", due(16, 9, 0)), now())
            .unwrap();
        let before = slot(&tasks);

        let result = tasks.update("42", TaskInput::new(TaskType::Exam, "Other", due(17, 9, 0)));

        assert!(matches!(result, Err(TaskError::NotFound(id)) if id == "42"));
        assert_eq!(slot(&tasks), before);
    }

    #[test]
    fn test_update_validates_before_lookup() {
        let mut tasks = Tasks::load(MemoryStorage::new(), now()).unwrap();

        let result = tasks.update("42", TaskInput::new(TaskType::Exam, "", due(17, 9, 0)));

        assert!(matches!(result, Err(TaskError::Validation(_))));
    }

    #[test]
    fn test_complete_and_complete_again() {
        let mut tasks = Tasks::load(MemoryStorage::new(), now()).unwrap();
        let task = tasks
            .create(TaskInput::new(TaskType::Quiz, "Chapter 3", due(16, 9, 0)), now())
            .unwrap();

        let completed = tasks.complete(&task.id, now()).unwrap();
        assert!(completed.completed);
        assert_eq!(completed.completed_at, Some(now()));
        assert!(slot(&tasks).unwrap().contains(r#""completedAt":"2024-01-15T09:00:00.000Z""#));

        let again = tasks.complete(&task.id, now() + Duration::hours(1)).unwrap();
        assert_eq!(again.completed_at, Some(now()));
        assert_completion_invariant(&tasks);
    }

    #[test]
    fn test_complete_missing_id() {
        let mut tasks = Tasks::load(MemoryStorage::new(), now()).unwrap();

        let result = tasks.complete("nope", now());

        assert!(matches!(result, Err(TaskError::NotFound(_))));
    }

    #[test]
    fn test_delete() {
        let mut tasks = Tasks::load(MemoryStorage::new(), now()).unwrap();
        let task = tasks
            .create(TaskInput::new(TaskType::Personal, "Gym", due(16, 18, 0)), now())
            .unwrap();

        assert!(tasks.delete(&task.id).unwrap());
        assert!(tasks.is_empty());
        assert_eq!(slot(&tasks).unwrap(), "[]");
    }

    #[test]
    fn test_delete_missing_id_is_byte_identical() {
        let mut tasks = Tasks::load(MemoryStorage::new(), now()).unwrap();
        tasks
            .create(TaskInput::new(TaskType::Personal, "Gym", due(16, 18, 0)), now())
            .unwrap();
        let before = slot(&tasks);

        assert!(!tasks.delete("does-not-exist").unwrap());

        assert_eq!(slot(&tasks), before);
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn test_retention_sweep_boundary() {
        let seed = r#"[
            {"id":"1","type":"homework","title":"Old","subject":"Math","dueDate":"2024-01-06T09:00:00","priority":"low","notes":"","completed":true,"createdAt":"2024-01-01T09:00:00.000Z","completedAt":"2024-01-07T09:00:00.000Z"},
            {"id":"2","type":"homework","title":"Recent","subject":"Math","dueDate":"2024-01-08T09:00:00","priority":"low","notes":"","completed":true,"createdAt":"2024-01-01T09:00:00.000Z","completedAt":"2024-01-09T09:00:00.000Z"},
            {"id":"3","type":"exam","title":"Pending","subject":"Math","dueDate":"2024-01-01T09:00:00","priority":"high","notes":"","completed":false,"createdAt":"2023-12-01T09:00:00.000Z"}
        ]"#;
        let storage = MemoryStorage::new().with_entry(TASKS_KEY, seed);

        let tasks = Tasks::load(storage, now()).unwrap();

        assert_eq!(tasks.outcome().purged, 1);
        assert!(tasks.get("1").is_none());
        assert!(tasks.get("2").is_some());
        // Old pending tasks are never swept
        assert!(tasks.get("3").is_some());
        assert!(!slot(&tasks).unwrap().contains(r#""id":"1""#));
    }

    #[test]
    fn test_retention_purges_exactly_seven_days_old() {
        let seed = r#"[{"id":"1","type":"homework","title":"Edge","subject":"","dueDate":"2024-01-08T09:00:00","priority":"low","notes":"","completed":true,"createdAt":"2024-01-01T09:00:00.000Z","completedAt":"2024-01-08T09:00:00.000Z"},{"id":"2","type":"homework","title":"Just inside","subject":"","dueDate":"2024-01-08T09:00:00","priority":"low","notes":"","completed":true,"createdAt":"2024-01-01T09:00:00.000Z","completedAt":"2024-01-08T09:00:00.001Z"}]"#;
        let storage = MemoryStorage::new().with_entry(TASKS_KEY, seed);

        let tasks = Tasks::load(storage, now()).unwrap();

        // Completed exactly 168 hours before now: purged
        assert!(tasks.get("1").is_none());
        assert!(tasks.get("2").is_some());
        assert_eq!(tasks.outcome().purged, 1);
    }

    #[test]
    fn test_retention_window_is_configurable() {
        let seed = r#"[{"id":"1","type":"homework","title":"Recent","subject":"","dueDate":"2024-01-08T09:00:00","priority":"low","notes":"","completed":true,"createdAt":"2024-01-01T09:00:00.000Z","completedAt":"2024-01-12T09:00:00.000Z"}]"#;
        let storage = MemoryStorage::new().with_entry(TASKS_KEY, seed);

        let tasks = Tasks::load_with_retention(storage, now(), Duration::days(2)).unwrap();

        assert!(tasks.is_empty());
        assert_eq!(tasks.outcome().purged, 1);
    }

    #[test]
    fn test_corrupt_slot_recovers_empty() {
        let storage = MemoryStorage::new().with_entry(TASKS_KEY, "{not json");

        let mut tasks = Tasks::load(storage, now()).unwrap();

        assert!(tasks.is_empty());
        assert!(tasks.outcome().recovered_from_corruption);
        assert_eq!(tasks.outcome().skipped, 0);
        // The slot is left alone until the next mutation
        assert_eq!(slot(&tasks).unwrap(), "{not json");

        tasks
            .create(TaskInput::new(TaskType::Homework, "Fresh start", due(16, 9, 0)), now())
            .unwrap();
        assert!(slot(&tasks).unwrap().starts_with(r#"[{"id":"1705309200000""#));
    }

    #[test]
    fn test_wrong_shape_counts_as_corrupt() {
        let storage = MemoryStorage::new().with_entry(TASKS_KEY, r#"{"tasks":[]}"#);

        let tasks = Tasks::load(storage, now()).unwrap();

        assert!(tasks.is_empty());
        assert!(tasks.outcome().recovered_from_corruption);
    }

    #[test]
    fn test_unreadable_element_is_skipped() {
        let seed = r#"[
            {"id":"1","type":"homework","title":"Readable","subject":"Math","dueDate":"2024-01-16T09:00:00","priority":"high","notes":"","completed":false,"createdAt":"2024-01-10T09:00:00.000Z"},
            {"id":"2","type":"project","title":"Unknown type","subject":"Math","dueDate":"2024-01-16T09:00:00","priority":"high","notes":"","completed":false,"createdAt":"2024-01-10T09:00:00.000Z"},
            {"id":"3","type":"exam","title":"Bad date","dueDate":"next week","priority":"low","completed":false,"createdAt":"2024-01-10T09:00:00.000Z"}
        ]"#;
        let storage = MemoryStorage::new().with_entry(TASKS_KEY, seed);

        let tasks = Tasks::load(storage, now()).unwrap();

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks.get("1").unwrap().title, "Readable");
        assert_eq!(tasks.outcome().skipped, 2);
        assert!(!tasks.outcome().recovered_from_corruption);
    }

    #[test]
    fn test_load_normalizes_saved_data() {
        let seed = r#"[
            {"id":"7","type":"quiz","title":"First","dueDate":"2024-01-16T09:00","priority":"medium","completed":false,"createdAt":"2024-01-10T09:00:00.000Z","completedAt":"2024-01-11T09:00:00.000Z"},
            {"id":"7","type":"quiz","title":"Duplicate","dueDate":"2024-01-16T09:00:00","priority":"medium","completed":false,"createdAt":"2024-01-10T09:00:00.000Z"}
        ]"#;
        let storage = MemoryStorage::new().with_entry(TASKS_KEY, seed);

        let tasks = Tasks::load(storage, now()).unwrap();

        assert_eq!(tasks.len(), 1);
        let task = tasks.get("7").unwrap();
        assert_eq!(task.title, "First");
        assert_eq!(task.subject, "");
        assert_eq!(task.notes, "");
        assert_eq!(task.due_date, due(16, 9, 0));
        assert_eq!(task.completed_at, None);
        assert_completion_invariant(&tasks);
    }

    #[test]
    fn test_save_after_load_is_idempotent() {
        let mut tasks = Tasks::load(MemoryStorage::new(), now()).unwrap();
        let task = tasks
            .create(TaskInput::new(TaskType::Exam, "Midterm", due(20, 14, 30)).subject("Math"), now())
            .unwrap();
        tasks
            .create(TaskInput::new(TaskType::Homework, "Lab", due(18, 9, 0)).notes("bring goggles"), now())
            .unwrap();
        tasks.complete(&task.id, now()).unwrap();
        let saved = slot(&tasks);

        let mut reloaded = Tasks::load(tasks.storage().clone(), now()).unwrap();
        reloaded.save().unwrap();

        assert_eq!(slot(&reloaded), saved);
        assert_eq!(reloaded.all(), tasks.all());
    }
}
