use crate::app::domain::fixtures::{Goal, Habit};
use crate::app::domain::toast::Toast;
use crate::app::services::text_ops::is_blank;

pub const NEW_GOAL_CATEGORY: &str = "Personal";
const FALLBACK_CATEGORY_CLASSES: &str = "bg-muted text-muted-foreground";

/// Badge style for a goal category
pub fn category_classes(category: &str) -> &'static str {
    match category {
        "Health" => "bg-secondary/20 text-secondary border-secondary/30",
        "Learning" => "bg-primary/20 text-primary border-primary/30",
        "Finance" => "bg-accent/20 text-accent border-accent/30",
        "Social" => "bg-mood-good/20 text-mood-good border-mood-good/30",
        _ => FALLBACK_CATEGORY_CLASSES,
    }
}

pub struct GoalsController {
    weekly: Vec<Goal>,
    habits: Vec<Habit>,
    monthly: Vec<Goal>,
    draft: String,
    show_add_form: bool,
    next_id: u32,
}

impl GoalsController {
    pub fn new(weekly: Vec<Goal>, habits: Vec<Habit>, monthly: Vec<Goal>) -> Self {
        let next_id = weekly.iter().map(|g| g.id).max().unwrap_or(0) + 1;
        Self {
            weekly,
            habits,
            monthly,
            draft: String::new(),
            show_add_form: false,
            next_id,
        }
    }

    pub fn weekly_goals(&self) -> &[Goal] {
        &self.weekly
    }

    pub fn daily_habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn monthly_goals(&self) -> &[Goal] {
        &self.monthly
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_add_form_visible(&self) -> bool {
        self.show_add_form
    }

    pub fn show_add_form(&mut self) {
        self.show_add_form = true;
    }

    pub fn cancel_add(&mut self) {
        self.show_add_form = false;
    }

    pub fn set_draft(&mut self, title: String) {
        self.draft = title;
    }

    /// Flip today's completion for a habit. Returns false for an unknown id.
    pub fn toggle_habit(&mut self, id: u32) -> bool {
        match self.habits.iter_mut().find(|h| h.id == id) {
            Some(habit) => {
                habit.completed = !habit.completed;
                true
            }
            None => false,
        }
    }

    /// Habits done today, out of all habits
    pub fn habits_done(&self) -> (usize, usize) {
        let done = self.habits.iter().filter(|h| h.completed).count();
        (done, self.habits.len())
    }

    /// Turn the draft into a new weekly goal.
    pub fn add_goal(&mut self) -> Result<Toast, Toast> {
        if is_blank(&self.draft) {
            return Err(Toast::destructive(
                "Please enter a goal",
                "Goal title cannot be empty.",
            ));
        }

        let goal = Goal {
            id: self.next_id,
            title: self.draft.trim().to_string(),
            progress: 0,
            completed: None,
            total: None,
            category: NEW_GOAL_CATEGORY.to_string(),
            due_date: None,
        };
        self.next_id += 1;
        tracing::info!(id = goal.id, title = %goal.title, "goal added");
        self.weekly.push(goal);

        self.draft.clear();
        self.show_add_form = false;

        Ok(Toast::success(
            "Goal added! \u{1f3af}",
            "Your new goal has been added to your list.",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::fixtures::Fixtures;

    fn controller() -> GoalsController {
        let fixtures = Fixtures::default();
        GoalsController::new(fixtures.weekly_goals, fixtures.daily_habits, fixtures.monthly_goals)
    }

    #[test]
    fn test_category_classes() {
        assert_eq!(
            category_classes("Health"),
            "bg-secondary/20 text-secondary border-secondary/30"
        );
        assert_eq!(
            category_classes("Social"),
            "bg-mood-good/20 text-mood-good border-mood-good/30"
        );
        assert_eq!(category_classes("Hobbies"), "bg-muted text-muted-foreground");
    }

    #[test]
    fn test_add_blank_goal_is_refused() {
        let mut goals = controller();
        goals.show_add_form();
        goals.set_draft("  ".to_string());
        let toast = goals.add_goal().unwrap_err();
        assert!(toast.is_destructive());
        assert_eq!(toast.description, "Goal title cannot be empty.");
        assert!(goals.is_add_form_visible());
        assert_eq!(goals.weekly_goals().len(), 3);
    }

    #[test]
    fn test_add_goal_appends_and_resets() {
        let mut goals = controller();
        goals.show_add_form();
        goals.set_draft(" Call grandma ".to_string());
        let toast = goals.add_goal().unwrap();
        assert_eq!(toast.title, "Goal added! \u{1f3af}");

        let added = goals.weekly_goals().last().unwrap();
        assert_eq!(added.id, 4);
        assert_eq!(added.title, "Call grandma");
        assert_eq!(added.progress, 0);
        assert_eq!(added.category, NEW_GOAL_CATEGORY);
        assert_eq!(goals.draft(), "");
        assert!(!goals.is_add_form_visible());
    }

    #[test]
    fn test_ids_keep_increasing() {
        let mut goals = GoalsController::new(Vec::new(), Vec::new(), Vec::new());
        goals.set_draft("one".to_string());
        goals.add_goal().unwrap();
        goals.set_draft("two".to_string());
        goals.add_goal().unwrap();
        let ids: Vec<_> = goals.weekly_goals().iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_toggle_habit() {
        let mut goals = controller();
        assert_eq!(goals.habits_done(), (3, 5));
        assert!(goals.toggle_habit(3));
        assert_eq!(goals.habits_done(), (4, 5));
        assert!(goals.toggle_habit(3));
        assert_eq!(goals.habits_done(), (3, 5));
        assert!(!goals.toggle_habit(42));
    }

    #[test]
    fn test_cancel_keeps_draft() {
        let mut goals = controller();
        goals.show_add_form();
        goals.set_draft("half typed".to_string());
        goals.cancel_add();
        assert!(!goals.is_add_form_visible());
        assert_eq!(goals.draft(), "half typed");
    }
}
