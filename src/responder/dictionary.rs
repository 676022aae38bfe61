//! Canned answers keyed by topic.
//!
//! Entry order is significant: the keyword fallback walks [TOPICS] front to back and
//! the first key contained in the query wins.

/// Topic keys referenced by the compound rules.
pub mod topics {
    pub const CRAMP: &str = "cramp";
    pub const CHEST: &str = "chest";
    pub const LEG: &str = "leg";
    pub const BACK: &str = "back";
    pub const ARM: &str = "arm";
    pub const SHOULDER: &str = "shoulder";
    pub const MEAL: &str = "meal";
    pub const PROTEIN: &str = "protein";
    pub const CARDIO: &str = "cardio";
    pub const BEGINNER: &str = "beginner";

    pub const CRAMP_CAUSE: &str = "cramp cause";
    pub const CRAMP_RELIEF: &str = "cramp relief";
    pub const CRAMP_PREVENT: &str = "cramp prevent";
    pub const MUSCLE_GAIN: &str = "muscle gain";
    pub const PRE_WORKOUT: &str = "pre workout";
    pub const POST_WORKOUT: &str = "post workout";
    pub const FAT_LOSS: &str = "fat loss";
    pub const BELLY_FAT: &str = "belly fat";
    pub const WORKOUT_FREQUENCY: &str = "workout frequency";
    pub const BEGINNER_WORKOUT: &str = "beginner workout";
    pub const ABOUT: &str = "about";
}

/// A topic key and its canned reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseEntry {
    /// Lowercase topic token, unique within [TOPICS].
    pub key: &'static str,
    pub text: &'static str,
}

impl ResponseEntry {
    pub const fn new(key: &'static str, text: &'static str) -> Self {
        Self { key, text }
    }
}

/// The response dictionary, in fallback scan order.
pub static TOPICS: &[ResponseEntry] = &[
    // Single keywords
    ResponseEntry::new(
        topics::CRAMP,
        "Muscle cramps are often caused by dehydration or electrolyte imbalances. Try stretching the affected muscle, massaging it gently, applying heat for chronic cramps or ice for acute ones. Stay hydrated and consider adding electrolytes to your water during intense workouts.",
    ),
    ResponseEntry::new(
        topics::CHEST,
        "For chest development, include exercises like bench press, push-ups, chest flys, and cable crossovers. Focus on proper form with a full range of motion. Vary between flat, incline, and decline positions to target different parts of the chest muscles.",
    ),
    ResponseEntry::new(
        topics::LEG,
        "Effective leg workouts include squats, lunges, deadlifts, leg press, and calf raises. For complete development, ensure your routine targets quads, hamstrings, glutes, and calves. Don't skip leg day - strong legs support overall body strength!",
    ),
    ResponseEntry::new(
        topics::BACK,
        "Build a stronger back with pull-ups, lat pulldowns, rows, and deadlifts. Focus on engaging your lats and maintaining good posture throughout movements. A strong back helps improve posture and prevent injuries.",
    ),
    ResponseEntry::new(
        topics::ARM,
        "For complete arm development, target your biceps with curls, your triceps with pushdowns and dips, and your forearms with wrist curls and farmer's walks. Remember, compound movements like bench press and rows also engage arm muscles.",
    ),
    ResponseEntry::new(
        topics::SHOULDER,
        "Develop well-rounded shoulders with overhead presses, lateral raises, front raises, and reverse flys. This targets all three deltoid heads. Maintain proper form and avoid using momentum to prevent shoulder injuries.",
    ),
    ResponseEntry::new(
        topics::MEAL,
        "Pre-workout meals should include carbs for energy and some protein, eaten 1-2 hours before exercise. Post-workout, focus on protein for muscle recovery and carbs to replenish glycogen, ideally within 45 minutes after your session.",
    ),
    ResponseEntry::new(
        topics::PROTEIN,
        "Good protein sources include chicken breast, lean beef, fish, eggs, dairy, tofu, legumes, and protein supplements like whey or plant protein. Most adults need about 0.8-1g of protein per pound of bodyweight daily for muscle maintenance and growth.",
    ),
    ResponseEntry::new(
        topics::CARDIO,
        "Effective cardio options include running, cycling, swimming, rowing, and high-intensity interval training (HIIT). For fat loss, mix steady-state cardio with HIIT sessions. For heart health, aim for at least 150 minutes of moderate cardio weekly.",
    ),
    ResponseEntry::new(
        topics::BEGINNER,
        "As a beginner, focus on learning proper form with bodyweight exercises and light weights. Start with full-body workouts 2-3 times weekly, allowing recovery days between sessions. Progress gradually by adding weight or reps as exercises become easier.",
    ),
    // Compound topics, reached through the rule table or a literal match
    ResponseEntry::new(
        topics::CRAMP_CAUSE,
        "Muscle cramps during exercise often happen due to dehydration, low electrolytes (like potassium, magnesium, or sodium), or overworking the muscles. Make sure you're hydrating well, warming up properly, and including mineral-rich foods in your diet. If they happen often or feel severe, it's smart to check with a doctor.",
    ),
    ResponseEntry::new(
        topics::CRAMP_RELIEF,
        "If you get a cramp, gently stretch and massage the affected muscle. Try applying a warm compress to relax the muscle or a cold pack if there's pain afterward. Drinking water with electrolytes may also help, especially if the cramp is caused by dehydration.",
    ),
    ResponseEntry::new(
        topics::CRAMP_PREVENT,
        "Stay hydrated before, during, and after workouts. Eat a diet rich in potassium, magnesium, and calcium. Don't skip warm-ups and cooldowns. Stretching regularly and gradually increasing workout intensity can also reduce cramping. Consider magnesium supplements if recommended by your healthcare provider.",
    ),
    ResponseEntry::new(
        topics::MUSCLE_GAIN,
        "To build muscle, focus on adequate protein intake (1.6-2.2g per kg of bodyweight), progressive overload in strength training, and caloric surplus. Consume lean protein sources (chicken, fish, tofu), complex carbs (brown rice, oats), and healthy fats. Consider a protein shake within 30 minutes post-workout to support muscle repair.",
    ),
    ResponseEntry::new(
        topics::PRE_WORKOUT,
        "Before workouts, aim for easily digestible carbs and moderate protein 1-2 hours prior to exercise. Good options include a banana with peanut butter, oatmeal with berries, or a small chicken wrap. Avoid heavy, fatty meals that might cause digestive discomfort during your session.",
    ),
    ResponseEntry::new(
        topics::POST_WORKOUT,
        "After exercise, focus on protein for muscle repair and carbs to replenish glycogen stores. Aim to eat within 45 minutes post-workout for optimal recovery. Great options include Greek yogurt with fruit, a protein smoothie with banana, or a turkey sandwich on whole grain bread.",
    ),
    ResponseEntry::new(
        topics::FAT_LOSS,
        "For fat loss, create a moderate calorie deficit (around 500 calories below maintenance) while maintaining adequate protein intake to preserve muscle. Focus on nutrient-dense whole foods like lean proteins, vegetables, fruits, whole grains, and healthy fats. Stay hydrated and consider intermittent fasting if it suits your lifestyle. Consistency is key!",
    ),
    ResponseEntry::new(
        topics::BELLY_FAT,
        "Spot reduction isn't physiologically possible, but you can reduce overall body fat through a combination of regular cardiovascular exercise, strength training, and a calorie-controlled diet. Focus on compound movements like squats and deadlifts that burn more calories, manage stress levels, and ensure adequate sleep for optimal hormonal balance.",
    ),
    ResponseEntry::new(
        topics::WORKOUT_FREQUENCY,
        "For optimal results, aim for 3-5 strength training sessions per week with at least one rest day between working the same muscle groups. Add 2-3 cardio sessions (150-300 minutes weekly depending on your goals). Listen to your body and adjust based on recovery needs. Even 20-30 minutes of exercise daily can provide significant health benefits when done consistently.",
    ),
    ResponseEntry::new(
        topics::BEGINNER_WORKOUT,
        "As a newcomer to fitness, start with 2-3 full-body workouts per week focusing on mastering form with bodyweight exercises like squats, lunges, modified push-ups, and planks. Begin with 15-30 minute sessions and gradually increase duration and intensity. Walking is an excellent starter cardio activity. Focus on consistency rather than perfection!",
    ),
    ResponseEntry::new(
        topics::ABOUT,
        "FitFusion was created by three friends with a shared passion for fitness and technology. Shyaam (Team Lead) brings expertise in motivation, Yashwant (Nutrition Expert) develops meal plans and nutrition guidance, and Sri Vignesh (Tech Lead) ensures the platform delivers personalized experiences through technology. Visit our About page to learn more about our story!",
    ),
];

/// Looks up an entry by its exact key.
pub fn lookup(key: &str) -> Option<&'static ResponseEntry> {
    TOPICS.iter().find(|entry| entry.key == key)
}
