//! "Fleet Scheduling": three commercial vehicles booked into one day.

use autoai_contracts::conversation::{
    BehaviorLogEntry, Message, MessageCategory, RiskLevel, Scenario, ScenarioIcon,
};

pub const ID: &str = "fleet";

pub fn scenario() -> Scenario {
    Scenario {
        id: ID.to_string(),
        name: "Fleet Scheduling".to_string(),
        icon: ScenarioIcon::Users,
        messages: messages(),
        behavior_log: behavior_log(),
    }
}

fn messages() -> Vec<Message> {
    vec![
        Message::agent(
            "1",
            "📊 **Fleet Alert:** Your commercial fleet (LogiTrans Pvt Ltd) has 3 vehicles requiring service:\n\n\
             • VH-FLEET-089 (Nexon EV) - Battery health 78%, needs inspection\n\
             • VH-FLEET-112 (Terrain SUV) - 30,000 km service due\n\
             • VH-FLEET-134 (City Compact) - AC compressor noise detected\n\n\
             Would you like me to coordinate appointments for all three vehicles?",
            "11:00 AM",
            MessageCategory::Info,
        ),
        Message::user(
            "2",
            "Yes, but I need them serviced on the same day to minimize fleet downtime.",
            "11:02 AM",
        ),
        Message::agent(
            "3",
            "🔍 Understood. Searching for same-day multi-vehicle service capacity at fleet-certified centers...\n\n\
             ✅ **OPTIMAL SOLUTION FOUND**\n\n\
             **Service Center:** Hero Fleet Hub - Peenya Industrial Area\n\
             **Date:** Thursday, Nov 13, 2025\n\
             **Multi-bay facility with fleet priority lane**\n\n\
             **Proposed Schedule:**\n\n\
             🚗 **VH-FLEET-089** (Nexon EV)\n\
             \u{20}  • Time: 9:00 AM - 11:30 AM\n\
             \u{20}  • Service: Battery diagnostics + HV system check\n\
             \u{20}  • Bay: EV Service Bay 2\n\
             \u{20}  • Tech: Arun Menon (EV Specialist)\n\n\
             🚗 **VH-FLEET-112** (Terrain SUV)\n\
             \u{20}  • Time: 9:30 AM - 12:00 PM\n\
             \u{20}  • Service: 30K km complete service\n\
             \u{20}  • Bay: Heavy Service Bay 4\n\
             \u{20}  • Tech: Deepak Singh (Fleet Expert)\n\n\
             🚗 **VH-FLEET-134** (City Compact)\n\
             \u{20}  • Time: 10:00 AM - 11:30 AM\n\
             \u{20}  • Service: AC repair + inspection\n\
             \u{20}  • Bay: Quick Service Bay 1\n\
             \u{20}  • Tech: Kavitha Reddy (AC Specialist)\n\n\
             **Fleet Benefits:**\n\
             ✅ 15% discount applied (fleet contract rate)\n\
             ✅ All vehicles ready by 12:30 PM\n\
             ✅ Courtesy shuttle for drivers\n\
             ✅ Consolidated invoice for easy accounting\n\
             ✅ Fleet management dashboard updated in real-time\n\n\
             Shall I proceed with this coordinated booking?",
            "11:03 AM",
            MessageCategory::Info,
        ),
        Message::user("4", "Perfect. Confirm all three.", "11:05 AM"),
        Message::agent(
            "5",
            "✅ **FLEET APPOINTMENTS CONFIRMED**\n\n\
             **Master Booking #:** FLEET-2024-456\n\
             **Company:** LogiTrans Pvt Ltd (Fleet ID: FL-8792)\n\
             **Service Center:** Hero Fleet Hub - Peenya\n\
             📍 Address: Plot 67, 3rd Phase, Peenya Industrial Area, Bangalore - 560058\n\
             📱 Fleet Coordinator: Suresh Patel - +91-80-5678-9012\n\n\
             **Date:** Thursday, November 13, 2025\n\n\
             **Vehicle 1:** VH-FLEET-089 (Nexon EV)\n\
             🕘 Check-in: 9:00 AM | Ready: 11:30 AM\n\
             💰 Est. Cost: ₹4,500\n\
             **Vehicle 2:** VH-FLEET-112 (Terrain SUV)\n\
             🕘 Check-in: 9:30 AM | Ready: 12:00 PM\n\
             💰 Est. Cost: ₹9,200\n\
             **Vehicle 3:** VH-FLEET-134 (City Compact)\n\
             🕘 Check-in: 10:00 AM | Ready: 11:30 AM\n\
             💰 Est. Cost: ₹6,800\n\n\
             **Total Estimated Cost:** ₹20,500\n\
             **Fleet Discount (15%):** -₹3,075\n\
             **Final Amount:** ₹17,425 + GST\n\n\
             📧 Confirmations sent to: fleet@logitrans.com\n\
             📲 SMS sent to all 3 drivers\n\
             🚐 Courtesy shuttle arranged for driver transport\n\
             📊 Fleet dashboard updated with service schedule\n\
             📄 Work orders generated and attached\n\n\
             **Pro Fleet Manager Integration:**\n\
             ✅ Service records auto-updated in your fleet management system\n\
             ✅ Vehicle downtime logged (3 vehicles × 2.5 hrs avg)\n\
             ✅ Predictive maintenance schedule recalculated\n\n\
             Your fleet operations team has been notified. Thank you for choosing Hero Fleet Services!",
            "11:05 AM",
            MessageCategory::Confirmation,
        ),
        Message::agent(
            "6",
            "🔐 **UEBA Security Notice:** Fleet-level transaction detected. Corporate credentials \
             verified. Multi-vehicle authorization approved under fleet manager account: \
             SM-Pradeep-Kumar. Access level: Fleet Administrator.",
            "11:06 AM",
            MessageCategory::Ueba,
        ),
    ]
}

fn behavior_log() -> Vec<BehaviorLogEntry> {
    vec![
        BehaviorLogEntry::new("Fleet health monitoring scan", "completed", "10:58:30 AM", RiskLevel::Low),
        BehaviorLogEntry::new("Multi-vehicle service needs detected", "identified", "11:00:05 AM", RiskLevel::Low),
        BehaviorLogEntry::new("Fleet coordination request received", "processing", "11:02:15 AM", RiskLevel::Low),
        BehaviorLogEntry::new("Same-day multi-bay availability search", "searching", "11:02:20 AM", RiskLevel::Low),
        BehaviorLogEntry::new("Fleet discount calculation", "applied", "11:03:10 AM", RiskLevel::Low),
        BehaviorLogEntry::new("UEBA: Corporate account access", "verified", "11:03:15 AM", RiskLevel::Low),
        BehaviorLogEntry::new("Technician specialization matching", "optimized", "11:03:25 AM", RiskLevel::Low),
        BehaviorLogEntry::new("3 parallel appointments scheduled", "confirmed", "11:05:40 AM", RiskLevel::Low),
        BehaviorLogEntry::new("Fleet management system sync", "synchronized", "11:05:55 AM", RiskLevel::Low),
        BehaviorLogEntry::new("Consolidated invoice generated", "created", "11:06:05 AM", RiskLevel::Low),
    ]
}
