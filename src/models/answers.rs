//! Answer record collected by the quiz
//!
//! Every key exists from construction. Text keys are overwritten, list keys
//! are toggled. The record is only ever changed through [`AnswerUpdate`].

use serde::Serialize;

/// Keys that hold a single string answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    WeightGoalRange,
    Gender,
    BodyPart,
    AgeRange,
    Name,
    BodyType,
    LifeImpact,
    Satisfaction,
    Difficulty,
    Obstacle,
    CurrentWeight,
    Height,
    DesiredWeight,
    Routine,
    SleepHours,
    WaterIntake,
}

impl TextField {
    /// Get all text keys in declaration order
    pub fn all() -> [Self; 16] {
        [
            Self::WeightGoalRange,
            Self::Gender,
            Self::BodyPart,
            Self::AgeRange,
            Self::Name,
            Self::BodyType,
            Self::LifeImpact,
            Self::Satisfaction,
            Self::Difficulty,
            Self::Obstacle,
            Self::CurrentWeight,
            Self::Height,
            Self::DesiredWeight,
            Self::Routine,
            Self::SleepHours,
            Self::WaterIntake,
        ]
    }

    /// Whether the key stores a validated number
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::CurrentWeight | Self::Height | Self::DesiredWeight)
    }
}

/// Keys that hold a multi-select answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListField {
    Goals,
    Benefits,
    Fruits,
}

/// A single change to the answer record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerUpdate {
    /// Overwrite a text key
    Set(TextField, String),
    /// Add the value if absent, remove it if present
    Toggle(ListField, String),
}

/// Accumulated quiz responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Answers {
    pub goals: Vec<String>,
    pub weight_goal_range: String,
    pub gender: String,
    pub body_part: String,
    pub age_range: String,
    pub name: String,
    pub body_type: String,
    pub life_impact: String,
    pub satisfaction: String,
    pub difficulty: String,
    pub obstacle: String,
    pub benefits: Vec<String>,
    pub current_weight: String,
    pub height: String,
    pub desired_weight: String,
    pub routine: String,
    pub sleep_hours: String,
    pub water_intake: String,
    pub fruits: Vec<String>,
}

impl Answers {
    /// Create an empty answer record
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a text key
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::WeightGoalRange => &self.weight_goal_range,
            TextField::Gender => &self.gender,
            TextField::BodyPart => &self.body_part,
            TextField::AgeRange => &self.age_range,
            TextField::Name => &self.name,
            TextField::BodyType => &self.body_type,
            TextField::LifeImpact => &self.life_impact,
            TextField::Satisfaction => &self.satisfaction,
            TextField::Difficulty => &self.difficulty,
            TextField::Obstacle => &self.obstacle,
            TextField::CurrentWeight => &self.current_weight,
            TextField::Height => &self.height,
            TextField::DesiredWeight => &self.desired_weight,
            TextField::Routine => &self.routine,
            TextField::SleepHours => &self.sleep_hours,
            TextField::WaterIntake => &self.water_intake,
        }
    }

    /// Read a list key
    pub fn list(&self, field: ListField) -> &[String] {
        match field {
            ListField::Goals => &self.goals,
            ListField::Benefits => &self.benefits,
            ListField::Fruits => &self.fruits,
        }
    }

    /// Check list membership
    pub fn contains(&self, field: ListField, value: &str) -> bool {
        self.list(field).iter().any(|item| item == value)
    }

    /// Apply an update to the record
    pub fn apply(&mut self, update: AnswerUpdate) {
        match update {
            AnswerUpdate::Set(field, value) => *self.text_mut(field) = value,
            AnswerUpdate::Toggle(field, value) => {
                let list = self.list_mut(field);
                match list.iter().position(|item| *item == value) {
                    Some(index) => {
                        list.remove(index);
                    }
                    None => list.push(value),
                }
            }
        }
    }

    /// Name to address the user with, falling back to a generic greeting
    pub fn display_name(&self) -> &str {
        let name = self.name.trim();
        if name.is_empty() {
            "Amiga"
        } else {
            name
        }
    }

    fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::WeightGoalRange => &mut self.weight_goal_range,
            TextField::Gender => &mut self.gender,
            TextField::BodyPart => &mut self.body_part,
            TextField::AgeRange => &mut self.age_range,
            TextField::Name => &mut self.name,
            TextField::BodyType => &mut self.body_type,
            TextField::LifeImpact => &mut self.life_impact,
            TextField::Satisfaction => &mut self.satisfaction,
            TextField::Difficulty => &mut self.difficulty,
            TextField::Obstacle => &mut self.obstacle,
            TextField::CurrentWeight => &mut self.current_weight,
            TextField::Height => &mut self.height,
            TextField::DesiredWeight => &mut self.desired_weight,
            TextField::Routine => &mut self.routine,
            TextField::SleepHours => &mut self.sleep_hours,
            TextField::WaterIntake => &mut self.water_intake,
        }
    }

    fn list_mut(&mut self, field: ListField) -> &mut Vec<String> {
        match field {
            ListField::Goals => &mut self.goals,
            ListField::Benefits => &mut self.benefits,
            ListField::Fruits => &mut self.fruits,
        }
    }
}
