use chrono::NaiveDate;

use crate::application::ports::{AuthorRepository, CourseRepository, RepositoryError};
use crate::domain::entities::{Author, Course};

/// Populate the store with a small demo data set so the API is explorable
/// out of the box. Controlled by `Config::seed_demo_data`.
pub async fn seed_demo_data(store: &super::InMemoryCourseLibrary) -> Result<(), RepositoryError> {
    let seed_authors = [
        (
            "Berry",
            "Griffin Beak Eldritch",
            NaiveDate::from_ymd_opt(1650, 7, 23),
            "Ships",
            vec![
                (
                    "Commandeering a Ship Without Getting Caught",
                    Some("Commandeering a ship in rough waters isn't easy. Commandeering it without getting caught is even harder. In this course you'll learn how to sail away and avoid those pesky musketeers."),
                ),
                (
                    "Overthrowing Mutiny",
                    Some("In this course, the author provides tips to avoid, or, if needed, overthrow pirate mutiny."),
                ),
            ],
        ),
        (
            "Nancy",
            "Swashbuckler Rye",
            NaiveDate::from_ymd_opt(1668, 5, 21),
            "Rum",
            vec![(
                "Avoiding Brawls While Sampling Rum",
                Some("Every good pirate loves rum, but it also has a tendency to get you into trouble. In this course you'll learn how to avoid that."),
            )],
        ),
        (
            "Eli",
            "Ivory Bones Sweet",
            NaiveDate::from_ymd_opt(1701, 12, 16),
            "Singing",
            vec![(
                "Singalong Pirate Hits",
                Some("In this course you'll learn how to sing all-time favourite pirate songs without sounding like you actually know the lyrics."),
            )],
        ),
        (
            "Arnold",
            "The Unseen Stafford",
            NaiveDate::from_ymd_opt(1702, 3, 6),
            "Maps",
            vec![],
        ),
        (
            "Seabury",
            "Toxic Reyson",
            NaiveDate::from_ymd_opt(1690, 11, 23),
            "Maps",
            vec![],
        ),
    ];

    for (first, last, date_of_birth, category, courses) in seed_authors {
        let author = Author::new(
            first.to_string(),
            last.to_string(),
            date_of_birth,
            Some(category.to_string()),
        );
        AuthorRepository::add(store, &author).await?;

        for (title, description) in courses {
            let course = Course::new(
                *author.id(),
                title.to_string(),
                description.map(|d| d.to_string()),
            );
            CourseRepository::add(store, &course).await?;
        }
    }

    tracing::info!("demo data seeded");

    Ok(())
}
