//! Task text appended after the context block for each generated section

pub const INVESTOR_SUMMARY: &str = "\
TASK: Write a crisp investor-ready summary (120-180 words).
Style: clear, specific, non-hype; include problem, solution, target user, business model, and traction snapshot.
Output headers: Problem · Solution · Why Now · Business Model · Traction · Ask (one line).";

pub const ELEVATOR_PITCH: &str = "\
TASK: Craft a 30-second elevator pitch (~60-80 words).
Include a relatable analogy only if it helps clarity.
End with a memorable one-liner tagline.";

pub const SWOT: &str = "\
TASK: Produce a SWOT analysis as short bullet points (4-6 bullets each).
Keep it practical and investor-focused.
Format:
- Strengths:
- Weaknesses:
- Opportunities:
- Threats:";

pub const PITCH_EMAIL: &str = "\
TASK: Write a concise investor outreach email (≤160 words).
Tone: professional, confident, data-oriented; avoid fluff.
Subject line + email body. Include a short CTA for a 20-min call.";

pub const STORYTELLING: &str = "\
TASK: Suggest 3 hook options, 2 metaphors/analogies, and 1 brief origin story narrative.
Keep it founder-authentic and audience-appropriate.";

pub const RISKS: &str = "\
TASK: Identify key risks (legal, tech, financial, market) and propose specific mitigations.
Output as a table with columns: Risk · Likelihood · Impact · Mitigation · Owner.";

pub const TEAM_ANALYZER: &str = "\
TASK: Assess the team's strengths and gaps. Recommend 2-3 strategic hires with role charters.
Include a skills matrix overview (Current · Gap · Priority).";

pub const FUNDING_ASK: &str = "\
TASK: Recommend a funding amount, stage, and 18-month allocation plan (percentages).
Include key milestones, expected runway, and top 3 KPIs for the next 2 quarters.";

pub const QNA: &str = "\
TASK: Simulate a tough investor Q&A: 10 sharp questions with suggested answers.
Style: candid, data-led, non-defensive.";

/// Placeholder names used when no competitors were supplied
pub const PLACEHOLDER_COMPETITORS: [&str; 3] = ["Competitor A", "Competitor B", "Competitor C"];

/// Competitor comparison task for a concrete list of names
pub fn competitor_table(competitors: &[String]) -> String {
    let names = if competitors.is_empty() {
        "N/A".to_string()
    } else {
        competitors.join(", ")
    };
    format!(
        "TASK: Compare the following competitors: {}\n\
         Output a markdown table with columns: Company · Positioning · Strengths · Weaknesses · Pricing/Model · Differentiation.\n\
         Keep each cell short (≤15 words).",
        names
    )
}
