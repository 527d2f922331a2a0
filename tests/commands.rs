#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};
    use studydesk::commands::edit::editable_input;
    use studydesk::libs::messages::Message;
    use studydesk::libs::task::{Priority, Task, TaskType};

    fn task(completed: bool) -> Task {
        let created_at = Utc.with_ymd_and_hms(2024, 1, 10, 8, 0, 0).unwrap();
        Task {
            id: "1705309200000".to_string(),
            task_type: TaskType::Quiz,
            title: "Chapter 5".to_string(),
            subject: "Biology".to_string(),
            due_date: NaiveDate::from_ymd_opt(2024, 1, 18)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
            priority: Priority::High,
            notes: "cells".to_string(),
            completed,
            created_at,
            completed_at: completed.then_some(created_at),
        }
    }

    #[test]
    fn test_pending_task_is_editable() {
        let pending = task(false);

        let input = editable_input(&pending).unwrap();

        assert_eq!(input.title, "Chapter 5");
        assert_eq!(input.subject, "Biology");
        assert_eq!(input.task_type, TaskType::Quiz);
        assert_eq!(input.priority, Priority::High);
        assert_eq!(input.due_date, pending.due_date);
        assert_eq!(input.notes, "cells");
    }

    #[test]
    fn test_completed_task_is_not_editable() {
        let result = editable_input(&task(true));

        match result {
            Err(message @ Message::TaskNotEditable(_)) => {
                assert_eq!(
                    message.to_string(),
                    "Task 'Chapter 5' is completed and can no longer be edited"
                );
            }
            other => panic!("expected TaskNotEditable, got {:?}", other),
        }
    }
}
