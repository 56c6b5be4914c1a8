//! "Critical Failure": a brake fault escalates to an emergency booking.

use autoai_contracts::conversation::{
    BehaviorLogEntry, Message, MessageCategory, RiskLevel, Scenario, ScenarioIcon,
};

pub const ID: &str = "urgent";

pub fn scenario() -> Scenario {
    Scenario {
        id: ID.to_string(),
        name: "Critical Failure".to_string(),
        icon: ScenarioIcon::AlertTriangle,
        messages: messages(),
        behavior_log: behavior_log(),
    }
}

fn messages() -> Vec<Message> {
    vec![
        Message::agent(
            "1",
            "🚨 CRITICAL ALERT: Brake system failure detected on VH-2024-007 (2024 Hero Nexon EV). \
             ABS sensor malfunction + low brake fluid pressure (0.8 bar, threshold: 1.2 bar). \
             Vehicle is unsafe to drive. Immediate service required.",
            "09:15 AM",
            MessageCategory::Urgent,
        ),
        Message::agent(
            "2",
            "⚠️ This is a recurring defect: 23 similar brake sensor failures detected across Nexon EV \
             fleet (VIN prefix: MH12) in the past 60 days. RCA/CAPA analysis #BR-2024-089 has been \
             initiated and sent to Manufacturing Quality Team.",
            "09:15 AM",
            MessageCategory::Rca,
        ),
        Message::user(
            "3",
            "This is serious! Book the nearest service center immediately.",
            "09:16 AM",
        ),
        Message::agent(
            "4",
            "🔍 Searching for emergency service availability within 10 km radius... Found 2 certified \
             brake service centers with immediate availability.",
            "09:16 AM",
            MessageCategory::Info,
        ),
        Message::agent(
            "5",
            "📍 **APPOINTMENT DETAILS**\n\n\
             **Service Center:** Hero MotorCorp Service Hub - Whitefield\n\
             **Address:** Plot 47, EPIP Zone, Whitefield, Bangalore - 560066\n\
             **Date & Time:** TODAY - Nov 9, 2025 at 10:30 AM (75 min from now)\n\
             **Service Advisor:** Rajesh Kumar (Senior Technician, 12+ yrs exp)\n\
             **Bay Assignment:** Emergency Bay 3\n\n\
             **Service Scope:**\n\
             • Complete brake system diagnosis (30 min)\n\
             • ABS sensor replacement (Part #: ABS-NK-2024-X7)\n\
             • Brake fluid flush & refill (DOT 4 spec)\n\
             • Full brake pad inspection\n\
             • Road test & safety validation\n\n\
             **Parts Ready:** ✅ ABS Sensor Module in stock\n\
             **Estimated Duration:** 2.5 hours\n\
             **Estimated Cost:** ₹8,500 - ₹11,200 (covered under warranty)\n\
             **Loaner Vehicle:** Available - Hero ZX Compact\n\n\
             Confirm this emergency appointment?",
            "09:17 AM",
            MessageCategory::Confirmation,
        ),
        Message::user("6", "Yes, confirm it. Send me the address.", "09:18 AM"),
        Message::agent(
            "7",
            "✅ **EMERGENCY APPOINTMENT CONFIRMED**\n\n\
             **Confirmation #:** EA-2024-0947\n\
             **Service Center:** Hero Whitefield Hub\n\
             📱 Contact: +91-80-4567-8900\n\
             📍 Google Maps link sent to your mobile\n\
             🚗 Tow truck dispatched to your location (ETA: 25 min)\n\
             📧 Detailed confirmation emailed to: customer@example.com\n\
             📲 SMS sent to: +91-98765-43210\n\n\
             **Important:** Do NOT drive the vehicle. Tow service is complimentary under emergency protocol.\n\n\
             **What happens next:**\n\
             1. Tow truck arrives (9:45 AM)\n\
             2. Vehicle transported to service center\n\
             3. Diagnostic begins immediately (10:30 AM)\n\
             4. Live updates sent via SMS\n\
             5. You receive loaner vehicle keys\n\n\
             Customer safety is our priority. Thank you for your patience.",
            "09:18 AM",
            MessageCategory::Confirmation,
        ),
        Message::agent(
            "8",
            "🔐 **UEBA Security Alert:** Unusual access pattern detected - Multiple diagnostic requests \
             from same IP in short duration. User identity verified via 2FA. Access granted. This \
             conversation is encrypted end-to-end.",
            "09:19 AM",
            MessageCategory::Ueba,
        ),
    ]
}

fn behavior_log() -> Vec<BehaviorLogEntry> {
    vec![
        BehaviorLogEntry::new("Critical brake failure detected", "detected", "09:15:12 AM", RiskLevel::Critical),
        BehaviorLogEntry::new("UEBA: Rapid access pattern detected", "monitoring", "09:15:18 AM", RiskLevel::Medium),
        BehaviorLogEntry::new("RCA pattern match: recurring defect", "matched", "09:15:22 AM", RiskLevel::High),
        BehaviorLogEntry::new("Manufacturing alert dispatched", "sent", "09:15:25 AM", RiskLevel::Low),
        BehaviorLogEntry::new("Emergency service center search", "completed", "09:16:45 AM", RiskLevel::Low),
        BehaviorLogEntry::new("Parts inventory verification", "confirmed", "09:17:02 AM", RiskLevel::Low),
        BehaviorLogEntry::new("UEBA: User 2FA verification", "passed", "09:17:15 AM", RiskLevel::Low),
        BehaviorLogEntry::new("Emergency appointment booked", "confirmed", "09:18:33 AM", RiskLevel::Low),
        BehaviorLogEntry::new("Tow service dispatched", "active", "09:18:40 AM", RiskLevel::Low),
        BehaviorLogEntry::new("Encrypted notification sent", "delivered", "09:18:45 AM", RiskLevel::Low),
    ]
}
