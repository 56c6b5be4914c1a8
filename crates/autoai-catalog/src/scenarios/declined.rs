//! "Declined & Reschedule": a routine reminder is postponed, then booked.

use autoai_contracts::conversation::{
    BehaviorLogEntry, Message, MessageCategory, RiskLevel, Scenario, ScenarioIcon,
};

pub const ID: &str = "declined";

pub fn scenario() -> Scenario {
    Scenario {
        id: ID.to_string(),
        name: "Declined & Reschedule".to_string(),
        icon: ScenarioIcon::CheckCircle,
        messages: messages(),
        behavior_log: behavior_log(),
    }
}

fn messages() -> Vec<Message> {
    vec![
        Message::agent(
            "1",
            "⚠️ Routine service reminder: VH-2024-012 (Hero Terrain SUV) is due for 20,000 km \
             maintenance. Oil change, filter replacement, and tire rotation recommended. Shall I \
             schedule an appointment?",
            "02:30 PM",
            MessageCategory::Info,
        ),
        Message::user("2", "Not right now, I'm traveling this week.", "02:32 PM"),
        Message::agent(
            "3",
            "✅ Understood. I'll postpone this reminder. When would be a good time to reschedule? I \
             can suggest slots next week based on your location and service center availability.",
            "02:32 PM",
            MessageCategory::Info,
        ),
        Message::user("4", "Next Monday afternoon works better.", "02:35 PM"),
        Message::agent(
            "5",
            "🔍 Checking availability for Monday, Nov 17, 2025 (afternoon slots)...\n\n\
             Found 4 available appointments:\n\n\
             **Option 1:** 2:00 PM - Hero City Center, MG Road (3.2 km away)\n\
             **Option 2:** 2:30 PM - Hero Express Service, Koramangala (5.1 km away)\n\
             **Option 3:** 3:00 PM - Hero Premium Hub, Indiranagar (4.7 km away)\n\
             **Option 4:** 4:00 PM - Hero City Center, MG Road (3.2 km away)\n\n\
             Which works best for you?",
            "02:35 PM",
            MessageCategory::Info,
        ),
        Message::user("6", "Option 3 at 3 PM looks good.", "02:37 PM"),
        Message::agent(
            "7",
            "✅ **APPOINTMENT CONFIRMED**\n\n\
             **Confirmation #:** SA-2024-1834\n\
             **Vehicle:** VH-2024-012 (Hero Terrain SUV)\n\
             **Service Type:** 20,000 km Scheduled Maintenance\n\n\
             **Location:** Hero Premium Hub - Indiranagar\n\
             **Address:** 100 Feet Road, HAL 2nd Stage, Indiranagar, Bangalore - 560038\n\
             📱 Contact: +91-80-2345-6789\n\n\
             **Date & Time:** Monday, Nov 17, 2025 at 3:00 PM\n\
             **Service Advisor:** Priya Sharma (Master Technician)\n\
             **Bay:** Standard Service Bay 7\n\n\
             **Services Included:**\n\
             • Engine oil change (5W-30 synthetic)\n\
             • Oil filter replacement\n\
             • Air filter inspection & replacement\n\
             • Tire rotation & balancing\n\
             • Brake pad thickness check\n\
             • 48-point vehicle inspection\n\
             • Software update check\n\n\
             **Parts Confirmed:** ✅ All parts in stock\n\
             **Estimated Duration:** 90 minutes\n\
             **Estimated Cost:** ₹6,800 (Service package rate)\n\
             **Waiting Lounge:** Coffee, WiFi, and workspace available\n\n\
             📧 Confirmation sent to: customer@example.com\n\
             📲 SMS reminder will be sent 24 hours before\n\
             📅 Added to your calendar\n\n\
             **Reminder:** We'll send you a 1-hour heads-up on the day of service. See you Monday!",
            "02:37 PM",
            MessageCategory::Confirmation,
        ),
        Message::agent(
            "8",
            "💡 **Pro Tip:** Since you declined the earlier slot, I've noted your preference for \
             afternoon appointments. Future service reminders will prioritize afternoon slots for \
             your convenience.",
            "02:38 PM",
            MessageCategory::Info,
        ),
    ]
}

fn behavior_log() -> Vec<BehaviorLogEntry> {
    vec![
        BehaviorLogEntry::new("Scheduled maintenance reminder triggered", "sent", "02:30:12 PM", RiskLevel::Low),
        BehaviorLogEntry::new("User declined immediate appointment", "logged", "02:32:05 PM", RiskLevel::Low),
        BehaviorLogEntry::new("Preference learning: afternoon slots", "recorded", "02:32:08 PM", RiskLevel::Low),
        BehaviorLogEntry::new("Calendar availability check", "completed", "02:35:22 PM", RiskLevel::Low),
        BehaviorLogEntry::new("Service center capacity query", "completed", "02:35:28 PM", RiskLevel::Low),
        BehaviorLogEntry::new("User preference applied to results", "applied", "02:35:30 PM", RiskLevel::Low),
        BehaviorLogEntry::new("Parts inventory verified", "confirmed", "02:37:15 PM", RiskLevel::Low),
        BehaviorLogEntry::new("Appointment confirmed & scheduled", "completed", "02:37:40 PM", RiskLevel::Low),
        BehaviorLogEntry::new("Multi-channel notification sent", "delivered", "02:37:45 PM", RiskLevel::Low),
        BehaviorLogEntry::new("Calendar integration updated", "synced", "02:37:50 PM", RiskLevel::Low),
    ]
}
