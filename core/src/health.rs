//! Rule-based health and lifestyle scoring. A fixed five-rule table maps
//! the questionnaire to advice lines and 0-10 weights; the lifestyle score
//! is the weight total divided by five, rounded to two decimals.

use crate::models::{HealthInput, HealthReport};

/// Score a health questionnaire. Pure and deterministic: identical input
/// always yields identical advice and score. Every branch is exhaustive,
/// so no numeric range fails.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn health_report(input: &HealthInput) -> HealthReport {
    let mut advice = Vec::new();
    let mut score: u32 = 0;

    // BMI. The >= 30.0 branch is checked before the 25.0-29.9 fallthrough
    // and scores higher; this mirrors the reference rule table exactly.
    if input.bmi < 18.5 {
        advice.push(
            "Increase calorie intake with balanced protein meals (underweight).".to_string(),
        );
        score += 6;
    } else if input.bmi <= 24.9 {
        advice.push(
            "Your BMI is in a healthy range. Maintain your current diet and activity.".to_string(),
        );
        score += 9;
    } else if input.bmi >= 30.0 {
        advice.push("Slightly overweight: focus on moderate cardio and portion control.".to_string());
        score += 7;
    } else {
        advice.push("High BMI: increase cardio sessions and reduce high-fat/sugar meals.".to_string());
        score += 5;
    }

    // Water intake (liters/day).
    if input.water_intake < 1.5 {
        advice.push("Increase water intake to at least 2.5 liters per day.".to_string());
        score += 5;
    } else if input.water_intake < 2.5 {
        advice.push("Drink slightly more water, aim for 2.5L daily.".to_string());
        score += 7;
    } else {
        advice.push("Excellent hydration habits!".to_string());
        score += 9;
    }

    // Workout frequency (days/week).
    if input.workout_frequency < 2.0 {
        advice.push("Start exercising at least 3 times a week.".to_string());
        score += 5;
    } else if input.workout_frequency < 4.0 {
        advice.push("Good activity level, try to increase intensity gradually.".to_string());
        score += 8;
    } else {
        advice.push("Great consistency! Maintain your routine.".to_string());
        score += 10;
    }

    // Exercise type, case-insensitive substring over a small closed set.
    let exercise = input.physical_exercise.to_lowercase();
    if exercise.contains("cardio") {
        advice.push("Excellent: cardio improves heart and stamina.".to_string());
        score += 9;
    } else if exercise.contains("strength") {
        advice.push("Strength training builds long-term metabolism. Keep it up!".to_string());
        score += 9;
    } else {
        advice.push("Add variety: mix cardio, flexibility, and strength workouts.".to_string());
        score += 7;
    }

    // Daily meal frequency.
    if input.daily_meals < 3.0 {
        advice.push("Increase to 3-5 balanced meals daily to stabilize metabolism.".to_string());
        score += 6;
    } else if input.daily_meals <= 5.0 {
        advice.push(
            "Perfect meal frequency. Keep meals balanced with proteins and veggies.".to_string(),
        );
        score += 9;
    } else {
        advice.push(
            "Too frequent meals may increase caloric load, try to space them out.".to_string(),
        );
        score += 6;
    }

    let lifestyle_score = (f64::from(score) / 5.0 * 100.0).round() / 100.0;
    advice.push(format!("Estimated Lifestyle Score: {lifestyle_score}/10"));

    if lifestyle_score >= 8.0 {
        advice.push("You're maintaining a healthy lifestyle! Continue consistency.".to_string());
    } else if lifestyle_score >= 6.0 {
        advice.push(
            "Good progress! Focus on minor improvements in hydration or exercise.".to_string(),
        );
    } else {
        advice.push("Needs attention: adjust nutrition, water, and activity levels.".to_string());
    }

    HealthReport {
        advice,
        lifestyle_score,
    }
}
