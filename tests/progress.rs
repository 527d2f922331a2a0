#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
    use studydesk::libs::progress::{round_percent, stats, subject_progress, week_buckets, week_total, Stats, WEEK_DAYS};
    use studydesk::libs::task::{Priority, Task, TaskType};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(21, 0, 0)
            .unwrap()
    }

    fn task(subject: &str, due_date: NaiveDateTime, priority: Priority, completed: bool) -> Task {
        let created_at = Utc.with_ymd_and_hms(2024, 1, 10, 8, 0, 0).unwrap();
        Task {
            id: format!("{}-{}", subject, due_date),
            task_type: TaskType::Exam,
            title: "Task".to_string(),
            subject: subject.to_string(),
            due_date,
            priority,
            notes: String::new(),
            completed,
            created_at,
            completed_at: completed.then_some(created_at),
        }
    }

    #[test]
    fn test_stats_empty() {
        assert_eq!(
            stats(&[], now()),
            Stats {
                pending: 0,
                completed: 0,
                overdue_count: 0,
                completion_rate_percent: 0,
            }
        );
    }

    #[test]
    fn test_stats_counts_overdue_pending_only() {
        let tasks = vec![
            task("Math", now() - Duration::hours(1), Priority::High, false),
            task("Math", now() - Duration::hours(2), Priority::High, true),
            task("Math", now() + Duration::hours(1), Priority::Low, false),
        ];

        let stats = stats(&tasks, now());

        assert_eq!(stats.pending, 2);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.overdue_count, 1);
        assert_eq!(stats.completion_rate_percent, 33);
    }

    #[test]
    fn test_round_percent() {
        assert_eq!(round_percent(0, 0), 0);
        assert_eq!(round_percent(1, 3), 33);
        assert_eq!(round_percent(2, 3), 67);
        assert_eq!(round_percent(1, 8), 13);
        assert_eq!(round_percent(1, 2), 50);
        assert_eq!(round_percent(4, 4), 100);
    }

    #[test]
    fn test_subject_progress_history() {
        let due = now() + Duration::days(2);
        let tasks = vec![
            task("History", due, Priority::Low, true),
            task("History", due + Duration::hours(1), Priority::Low, false),
            task("History", due + Duration::hours(2), Priority::Low, false),
        ];

        let progress = subject_progress(&tasks);

        assert_eq!(progress.len(), 1);
        assert_eq!(progress[0].subject, "History");
        assert_eq!(progress[0].completed, 1);
        assert_eq!(progress[0].total, 3);
        assert_eq!(progress[0].percentage, 33);
    }

    #[test]
    fn test_subject_progress_order() {
        let due = now() + Duration::days(2);
        let tasks = vec![
            task("Art", due, Priority::Low, false),
            task("Math", due, Priority::Low, true),
            task("Biology", due, Priority::Low, false),
            task("", due, Priority::Low, true),
            task("Math", due + Duration::hours(1), Priority::Low, false),
        ];

        let subjects: Vec<String> = subject_progress(&tasks)
            .into_iter()
            .map(|entry| entry.subject)
            .collect();

        // Math leads at 50%; Art and Biology tie at 0% and keep first-seen order
        assert_eq!(subjects, vec!["Math", "Art", "Biology"]);
    }

    #[test]
    fn test_week_buckets_calendar_days() {
        let tomorrow_morning = NaiveDate::from_ymd_opt(2024, 1, 16)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let tasks = vec![
            // Earlier today, already overdue, still today's bucket
            task("Math", now() - Duration::hours(10), Priority::Low, false),
            // Less than 24h away but on the next calendar day
            task("Math", tomorrow_morning, Priority::High, false),
            task("Math", tomorrow_morning + Duration::hours(2), Priority::Low, false),
            // Completed tasks never count
            task("Math", tomorrow_morning, Priority::High, true),
            // Day 7 is outside the strip
            task("Math", now() + Duration::days(7), Priority::High, false),
        ];

        let buckets = week_buckets(&tasks, now());

        assert_eq!(buckets.len(), WEEK_DAYS as usize);
        assert!(buckets[0].is_today);
        assert!(buckets[1..].iter().all(|bucket| !bucket.is_today));
        assert_eq!(buckets[0].date, now().date());
        assert_eq!(buckets[6].date, NaiveDate::from_ymd_opt(2024, 1, 21).unwrap());

        assert_eq!(buckets[0].task_count, 1);
        assert!(!buckets[0].has_high_priority);
        assert_eq!(buckets[1].task_count, 2);
        assert!(buckets[1].has_high_priority);
        assert_eq!(week_total(&buckets), 3);
    }
}
