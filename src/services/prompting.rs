use crate::types::TripRequest;

/// Fixed prompt used by the connectivity self test.
pub const CONNECTIVITY_PROMPT: &str =
    "Respond with 'API test successful' if you can read this message.";

/// Section headers the model is asked to reproduce, in order.
pub const PLAN_SECTIONS: [&str; 8] = [
    "Daily Itinerary",
    "Must-See Attractions",
    "Where to Stay",
    "Best Time to Visit",
    "Local Food to Try",
    "Cultural Tips",
    "How to Get Around",
    "Budget Estimate",
];

const SECTION_GUIDANCE: [&str; 8] = [
    "For each day, use this format:
Day X (include actual date if provided)
• Morning (9:00): Activity/Place
• Afternoon (14:00): Activity/Place
• Evening (19:00): Activity/Place
Include [Location Name](maps) for each place mentioned.",
    "List key attractions with their exact Google Maps names:
• [Attraction Name](maps) - Brief description
• [Attraction Name](maps) - Brief description",
    "• Recommended areas: [District/Area Name](maps)
• Specific hotel suggestions in each area
• Price ranges per night",
    "• Seasonal recommendations
• Weather considerations
• Special events or festivals",
    "• Must-try dishes
• [Restaurant/Food District Name](maps) - Specialties
• Price ranges for meals",
    "• Local customs
• Etiquette guidelines
• Important phrases",
    "• Public transportation options
• [Transportation Hub Names](maps)
• Cost estimates for different modes",
    "• Accommodation: Price range
• Daily meals: Price range
• Activities: Price range
• Transportation: Price range
• Total estimated budget",
];

const CLOSING_INSTRUCTIONS: &str = "Keep it practical and organized with bullet points.
For each location mentioned, use the exact name as it would appear on Google Maps using the [Name](maps) format.
Consider the specific dates when suggesting activities and making recommendations.";

/// "1 person", "3 people".
pub fn party_phrase(party_size: u32) -> String {
    let noun = if party_size == 1 { "person" } else { "people" };
    format!("{party_size} {noun}")
}

/// Build the travel-guide prompt sent to the generation service.
pub fn build_trip_prompt(request: &TripRequest) -> String {
    let date_info = request
        .date_range()
        .map(|(start, end)| format!("\nTravel dates: From {start} to {end}"))
        .unwrap_or_default();

    let sections = PLAN_SECTIONS
        .iter()
        .zip(SECTION_GUIDANCE.iter())
        .enumerate()
        .map(|(idx, (header, guidance))| format!("{}. {}\n{}", idx + 1, header, guidance))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "Create a detailed {days}-day travel guide for {destination} for {party}.{date_info}\n\
         Trip details: {description}\n\n\
         Format the response with the following sections, using exact headers:\n\n\
         {sections}\n\n\
         {closing}",
        days = request.duration_days,
        destination = request.destination,
        party = party_phrase(request.party_size),
        date_info = date_info,
        description = request.description,
        sections = sections,
        closing = CLOSING_INSTRUCTIONS,
    )
}
