//! The static campus event set served until a persisted backing store lands.

use askcampus_core::{EventCategory, EventRecord};
use chrono::NaiveDate;

fn skills(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

pub fn campus_events() -> Vec<EventRecord> {
    vec![
        EventRecord {
            id: "1".to_string(),
            title: "Google Software Engineer Placement Drive".to_string(),
            description: "Google is visiting our campus for recruitment of Software Engineer \
                          positions. Bring your resume and be prepared for technical interviews \
                          covering data structures, algorithms, and system design."
                .to_string(),
            category: EventCategory::Placement,
            date: NaiveDate::from_ymd_opt(2025, 7, 25),
            time: Some("10:00 AM".to_string()),
            location: "Main Auditorium".to_string(),
            organizer: "Placement Cell".to_string(),
            registrations: Some(156),
            max_registrations: Some(200),
            skills: skills(&["Java", "Python", "Data Structures", "Algorithms"]),
            eligibility: Some("CSE, IT students with 7+ CGPA".to_string()),
            registration_link: None,
        },
        EventRecord {
            id: "2".to_string(),
            title: "React.js Workshop: Building Modern Web Apps".to_string(),
            description: "Learn to build modern, responsive web applications using React.js. \
                          This hands-on workshop covers components, hooks, state management, \
                          and deployment strategies."
                .to_string(),
            category: EventCategory::Workshop,
            date: NaiveDate::from_ymd_opt(2025, 7, 22),
            time: Some("2:00 PM".to_string()),
            location: "Computer Lab 1".to_string(),
            organizer: "Tech Club".to_string(),
            registrations: Some(45),
            max_registrations: Some(50),
            skills: skills(&["JavaScript", "React", "HTML", "CSS"]),
            eligibility: Some("All students with basic JavaScript knowledge".to_string()),
            registration_link: None,
        },
        EventRecord {
            id: "3".to_string(),
            title: "Annual Cultural Fest - Spectrum 2025".to_string(),
            description: "Join us for the biggest cultural celebration of the year! Dance \
                          competitions, music performances, drama, art exhibitions, and much \
                          more. Prizes worth ₹50,000!"
                .to_string(),
            category: EventCategory::Cultural,
            date: NaiveDate::from_ymd_opt(2025, 7, 30),
            time: Some("6:00 PM".to_string()),
            location: "Open Ground".to_string(),
            organizer: "Cultural Committee".to_string(),
            registrations: Some(320),
            max_registrations: Some(500),
            skills: skills(&["Dancing", "Singing", "Acting", "Art"]),
            eligibility: Some("All students and faculty".to_string()),
            registration_link: None,
        },
        EventRecord {
            id: "4".to_string(),
            title: "Microsoft Internship Program".to_string(),
            description: "Microsoft is offering summer internship opportunities for students \
                          in their pre-final year. Great opportunity to work on real-world \
                          projects and get mentorship."
                .to_string(),
            category: EventCategory::Placement,
            date: NaiveDate::from_ymd_opt(2025, 7, 28),
            time: Some("11:00 AM".to_string()),
            location: "Seminar Hall 2".to_string(),
            organizer: "Placement Cell".to_string(),
            registrations: Some(89),
            max_registrations: Some(150),
            skills: skills(&["C#", ".NET", "Azure", "Problem Solving"]),
            eligibility: Some("Pre-final year students with 6.5+ CGPA".to_string()),
            registration_link: None,
        },
        EventRecord {
            id: "5".to_string(),
            title: "Machine Learning & AI Workshop".to_string(),
            description: "Dive deep into the world of artificial intelligence and machine \
                          learning. Learn about neural networks, deep learning, and practical \
                          implementation using Python and TensorFlow."
                .to_string(),
            category: EventCategory::Workshop,
            date: NaiveDate::from_ymd_opt(2025, 7, 26),
            time: Some("9:00 AM".to_string()),
            location: "AI Lab".to_string(),
            organizer: "AI Research Club".to_string(),
            registrations: Some(67),
            max_registrations: Some(80),
            skills: skills(&["Python", "TensorFlow", "Mathematics", "Statistics"]),
            eligibility: Some("Students with programming background".to_string()),
            registration_link: None,
        },
        EventRecord {
            id: "6".to_string(),
            title: "Photography Exhibition: Campus Through Lens".to_string(),
            description: "Showcase your photography skills! Submit your best campus \
                          photographs and win exciting prizes. Theme: \"Life at Campus\" - \
                          capturing moments, emotions, and stories."
                .to_string(),
            category: EventCategory::Cultural,
            date: NaiveDate::from_ymd_opt(2025, 8, 2),
            time: Some("4:00 PM".to_string()),
            location: "Art Gallery".to_string(),
            organizer: "Photography Club".to_string(),
            registrations: Some(78),
            max_registrations: Some(100),
            skills: skills(&["Photography", "Image Editing", "Creativity"]),
            eligibility: Some("All students".to_string()),
            registration_link: None,
        },
        EventRecord {
            id: "7".to_string(),
            title: "Cybersecurity Awareness Seminar".to_string(),
            description: "Learn about the latest cybersecurity threats and how to protect \
                          yourself and organizations. Industry experts will share insights on \
                          ethical hacking and security practices."
                .to_string(),
            category: EventCategory::Workshop,
            date: NaiveDate::from_ymd_opt(2025, 8, 5),
            time: Some("1:00 PM".to_string()),
            location: "Main Auditorium".to_string(),
            organizer: "Cybersecurity Club".to_string(),
            registrations: Some(134),
            max_registrations: Some(200),
            skills: skills(&["Network Security", "Ethical Hacking", "Cybersecurity"]),
            eligibility: Some("All technical students".to_string()),
            registration_link: None,
        },
        EventRecord {
            id: "8".to_string(),
            title: "Startup Pitch Competition".to_string(),
            description: "Present your innovative startup ideas to industry mentors and \
                          investors. Winner gets ₹1 lakh seed funding and incubation support. \
                          Registration includes mentorship sessions."
                .to_string(),
            category: EventCategory::Cultural,
            date: NaiveDate::from_ymd_opt(2025, 8, 8),
            time: Some("10:00 AM".to_string()),
            location: "Innovation Hub".to_string(),
            organizer: "Entrepreneurship Cell".to_string(),
            registrations: Some(23),
            max_registrations: Some(30),
            skills: skills(&["Business Planning", "Presentation", "Innovation"]),
            eligibility: Some("All students with startup ideas".to_string()),
            registration_link: None,
        },
    ]
}
