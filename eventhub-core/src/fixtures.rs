//! In-memory catalog backing the browse, detail, and dashboard surfaces.
//!
//! There is no persistence layer: every command rebuilds the catalog from
//! these fixtures, which serve as the candidate set for the query engine.

use crate::dashboard::{EventStatus, ManagedEvent};
use crate::event::{Category, Event, Speaker};

fn make_event(id: &str, title: &str, description: &str, category: Category) -> Event {
    Event {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        full_description: None,
        date: String::new(),
        time: None,
        location: String::new(),
        address: None,
        attendees: 0,
        max_attendees: 0,
        image: None,
        category,
        tags: Vec::new(),
        price: 0.0,
        speakers: Vec::new(),
    }
}

/// The full event catalog.
pub fn sample_events() -> Vec<Event> {
    let mut tech_conference = make_event(
        "1",
        "Tech Conference 2025",
        "Join us for the biggest tech conference of the year with industry leaders",
        Category::Tech,
    );
    tech_conference.full_description = Some(
        "This comprehensive tech conference brings together innovators, entrepreneurs, \
         and tech enthusiasts from around the world. Over two days, attend keynote \
         speeches from industry leaders, participate in hands-on workshops, and network \
         with like-minded professionals. Topics include AI, cloud computing, \
         cybersecurity, and emerging technologies."
            .to_string(),
    );
    tech_conference.date = "March 15, 2025".to_string();
    tech_conference.time = Some("9:00 AM - 5:00 PM".to_string());
    tech_conference.location = "San Francisco, CA".to_string();
    tech_conference.address = Some("Moscone Center, 747 Howard St".to_string());
    tech_conference.attendees = 245;
    tech_conference.max_attendees = 500;
    tech_conference.image = Some("/tech-conference-stage.jpg".to_string());
    tech_conference.tags = vec!["Networking".to_string(), "Innovation".to_string(), "AI".to_string()];
    tech_conference.price = 199.0;
    tech_conference.speakers = vec![
        Speaker { name: "Sarah Chen".to_string(), title: "VP of AI at Tech Corp".to_string() },
        Speaker { name: "James Wilson".to_string(), title: "CEO of StartupXYZ".to_string() },
        Speaker { name: "Emma Davis".to_string(), title: "Lead Architect at CloudTech".to_string() },
    ];

    let mut design_workshop = make_event(
        "2",
        "Web Design Workshop",
        "Learn modern web design principles and tools from experts",
        Category::Design,
    );
    design_workshop.date = "March 20, 2025".to_string();
    design_workshop.location = "New York, NY".to_string();
    design_workshop.attendees = 89;
    design_workshop.max_attendees = 150;
    design_workshop.image = Some("/collaborative-design-workshop.png".to_string());
    design_workshop.tags = vec!["Workshop".to_string(), "Design".to_string(), "UX".to_string()];
    design_workshop.price = 99.0;

    let mut startup_meetup = make_event(
        "3",
        "Startup Meetup",
        "Network with entrepreneurs and investors in the startup ecosystem",
        Category::Business,
    );
    startup_meetup.date = "March 22, 2025".to_string();
    startup_meetup.location = "Austin, TX".to_string();
    startup_meetup.attendees = 156;
    startup_meetup.max_attendees = 300;
    startup_meetup.image = Some("/startup-networking-event.png".to_string());
    startup_meetup.tags =
        vec!["Networking".to_string(), "Startups".to_string(), "Investors".to_string()];
    startup_meetup.price = 0.0;

    let mut ai_summit = make_event(
        "4",
        "AI & Machine Learning Summit",
        "Explore the latest advancements in artificial intelligence",
        Category::Tech,
    );
    ai_summit.date = "April 5, 2025".to_string();
    ai_summit.location = "Boston, MA".to_string();
    ai_summit.attendees = 312;
    ai_summit.max_attendees = 600;
    ai_summit.image = Some("/artificial-intelligence-presentation.jpg".to_string());
    ai_summit.tags =
        vec!["AI".to_string(), "Machine Learning".to_string(), "Data Science".to_string()];
    ai_summit.price = 299.0;

    let mut marketing_bootcamp = make_event(
        "5",
        "Digital Marketing Bootcamp",
        "Master digital marketing strategies and tools",
        Category::Marketing,
    );
    marketing_bootcamp.date = "April 10, 2025".to_string();
    marketing_bootcamp.location = "Los Angeles, CA".to_string();
    marketing_bootcamp.attendees = 178;
    marketing_bootcamp.max_attendees = 400;
    marketing_bootcamp.image = Some("/digital-marketing-classroom.jpg".to_string());
    marketing_bootcamp.tags =
        vec!["Marketing".to_string(), "SEO".to_string(), "Social Media".to_string()];
    marketing_bootcamp.price = 149.0;

    let mut design_conference = make_event(
        "6",
        "UX/UI Design Conference",
        "Discover cutting-edge design trends and best practices",
        Category::Design,
    );
    design_conference.date = "April 18, 2025".to_string();
    design_conference.location = "Seattle, WA".to_string();
    design_conference.attendees = 203;
    design_conference.max_attendees = 350;
    design_conference.image = Some("/ux-ui-conference.png".to_string());
    design_conference.tags =
        vec!["UX".to_string(), "UI".to_string(), "Design Systems".to_string()];
    design_conference.price = 179.0;

    vec![
        tech_conference,
        design_workshop,
        startup_meetup,
        ai_summit,
        marketing_bootcamp,
        design_conference,
    ]
}

/// The events the user organizes, shown on the dashboard.
pub fn managed_events() -> Vec<ManagedEvent> {
    vec![
        ManagedEvent {
            id: "1".to_string(),
            title: "Tech Conference 2025".to_string(),
            date: "March 15, 2025".to_string(),
            attendees: 245,
            capacity: 500,
            status: EventStatus::Upcoming,
            views: 1240,
            registrations: 245,
        },
        ManagedEvent {
            id: "2".to_string(),
            title: "Web Design Workshop".to_string(),
            date: "March 20, 2025".to_string(),
            attendees: 89,
            capacity: 150,
            status: EventStatus::Upcoming,
            views: 456,
            registrations: 89,
        },
        ManagedEvent {
            id: "3".to_string(),
            title: "Startup Meetup".to_string(),
            date: "February 10, 2025".to_string(),
            attendees: 156,
            capacity: 300,
            status: EventStatus::Completed,
            views: 890,
            registrations: 156,
        },
    ]
}
