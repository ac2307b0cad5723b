use chrono::{NaiveDate, Weekday};

use crate::{CreateError, DayID, DeleteError, Name, ReadError, RoutineID, SetID};

#[allow(async_fn_in_trait)]
pub trait RoutineService {
    async fn get_routines(&self) -> Result<Vec<WorkoutRoutine>, ReadError>;
    async fn get_routine(&self, id: RoutineID) -> Result<WorkoutRoutine, ReadError>;
    async fn create_routine(
        &self,
        name: Name,
        description: String,
    ) -> Result<WorkoutRoutine, CreateError>;
    async fn delete_routine(&self, id: RoutineID) -> Result<RoutineID, DeleteError>;
}

#[allow(async_fn_in_trait)]
pub trait RoutineRepository {
    async fn read_routines(&self) -> Result<Vec<WorkoutRoutine>, ReadError>;
    /// Reads a routine including its days and their sets.
    async fn read_routine(&self, id: RoutineID) -> Result<WorkoutRoutine, ReadError>;
    async fn create_routine(
        &self,
        name: Name,
        description: String,
    ) -> Result<WorkoutRoutine, CreateError>;
    async fn delete_routine(&self, id: RoutineID) -> Result<RoutineID, DeleteError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutRoutine {
    pub id: RoutineID,
    pub name: String,
    pub description: String,
    pub date: NaiveDate,
    pub is_dynamic: bool,
    pub days: Vec<Day>,
}

impl WorkoutRoutine {
    #[must_use]
    pub fn days_on(&self, weekday: Weekday) -> Vec<&Day> {
        self.days
            .iter()
            .filter(|d| d.weekdays().contains(&weekday))
            .collect()
    }

    #[must_use]
    pub fn num_sets(&self) -> u32 {
        self.days
            .iter()
            .flat_map(|d| d.sets.iter())
            .map(|s| s.sets)
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Day {
    pub id: DayID,
    pub description: String,
    /// ISO weekday numbers (1 = Monday, 7 = Sunday).
    pub days_of_week: Vec<u8>,
    pub decision_result: bool,
    pub decision_stdout: String,
    pub sets: Vec<WorkoutSet>,
}

impl Day {
    #[must_use]
    pub fn weekdays(&self) -> Vec<Weekday> {
        self.days_of_week
            .iter()
            .filter_map(|d| match d {
                1 => Some(Weekday::Mon),
                2 => Some(Weekday::Tue),
                3 => Some(Weekday::Wed),
                4 => Some(Weekday::Thu),
                5 => Some(Weekday::Fri),
                6 => Some(Weekday::Sat),
                7 => Some(Weekday::Sun),
                _ => None,
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSet {
    pub id: SetID,
    pub day: DayID,
    pub order: u32,
    pub sets: u32,
    pub comment: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn routine() -> WorkoutRoutine {
        WorkoutRoutine {
            id: 1.into(),
            name: "5x5".to_string(),
            description: String::new(),
            date: NaiveDate::from_ymd_opt(2022, 1, 3).unwrap(),
            is_dynamic: false,
            days: vec![
                Day {
                    id: 10.into(),
                    description: "A".to_string(),
                    days_of_week: vec![1, 5],
                    decision_result: false,
                    decision_stdout: String::new(),
                    sets: vec![
                        WorkoutSet {
                            id: 100.into(),
                            day: 10.into(),
                            order: 1,
                            sets: 5,
                            comment: String::new(),
                        },
                        WorkoutSet {
                            id: 101.into(),
                            day: 10.into(),
                            order: 2,
                            sets: 3,
                            comment: String::new(),
                        },
                    ],
                },
                Day {
                    id: 11.into(),
                    description: "B".to_string(),
                    days_of_week: vec![3, 9],
                    decision_result: false,
                    decision_stdout: String::new(),
                    sets: vec![],
                },
            ],
        }
    }

    #[test]
    fn test_day_weekdays() {
        assert_eq!(routine().days[0].weekdays(), vec![Weekday::Mon, Weekday::Fri]);
        assert_eq!(routine().days[1].weekdays(), vec![Weekday::Wed]);
    }

    #[test]
    fn test_routine_days_on() {
        let routine = routine();
        assert_eq!(
            routine
                .days_on(Weekday::Fri)
                .iter()
                .map(|d| d.id)
                .collect::<Vec<_>>(),
            vec![10.into()]
        );
        assert!(routine.days_on(Weekday::Sun).is_empty());
    }

    #[test]
    fn test_routine_num_sets() {
        assert_eq!(routine().num_sets(), 8);
    }
}
