use askcampus_core::{Query, UserContext};

/// Builds the fixed campus-assistant instruction. The template is static;
/// only the three context fields and the literal question are interpolated,
/// so user input can steer the topic but never the instructions.
pub fn build_prompt(query: &Query, context: &UserContext) -> String {
    format!(
        "You are AskCampusBot, a helpful assistant for college students.\n\n\
         User Profile: {name}, Year: {year}, Department: {department}\n\n\
         Help with campus-related questions like:\n\
         - Exam schedules and deadlines\n\
         - Placement procedures and companies\n\
         - Workshop and event information\n\
         - Academic policies and procedures\n\
         - Campus facilities and services\n\n\
         User Question: {question}\n\n\
         Provide helpful, accurate responses specific to campus life. \
         Keep responses conversational and friendly.",
        name = context.name,
        year = context.academic_year,
        department = context.department,
        question = query.text(),
    )
}
