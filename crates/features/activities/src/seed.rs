use crate::model::Activity;

/// Activities offered when the process starts.
#[must_use]
pub fn default_activities() -> Vec<(&'static str, Activity)> {
    vec![
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Basketball Team",
            Activity::new(
                "Practice and compete in inter-school basketball games",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                15,
            )
            .with_participants(["james@mergington.edu"]),
        ),
        (
            "Tennis Club",
            Activity::new(
                "Improve your serve and play friendly matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:00 PM",
                10,
            )
            .with_participants(["lucas@mergington.edu"]),
        ),
        (
            "Art Studio",
            Activity::new(
                "Explore painting, drawing and sculpture",
                "Wednesdays, 3:30 PM - 5:00 PM",
                18,
            )
            .with_participants(["ava@mergington.edu", "mia@mergington.edu"]),
        ),
        (
            "Drama Club",
            Activity::new(
                "Act, direct and stage the school plays",
                "Thursdays, 4:00 PM - 6:00 PM",
                25,
            )
            .with_participants(["amelia@mergington.edu"]),
        ),
        (
            "Math Club",
            Activity::new(
                "Solve challenging problems and prepare for math olympiads",
                "Tuesdays, 3:30 PM - 4:30 PM",
                16,
            )
            .with_participants(["ethan@mergington.edu", "harper@mergington.edu"]),
        ),
        (
            "Debate Team",
            Activity::new(
                "Sharpen public speaking and argue current topics",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["liam@mergington.edu"]),
        ),
    ]
}
