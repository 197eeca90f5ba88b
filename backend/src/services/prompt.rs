//! Prompt sent to the interpretation generator.

use chrono::NaiveDate;

use crate::models::KinResult;
use crate::services::descriptions::DescriptionTable;

/// Build the natural-language prompt for a personalized reading.
pub fn build_prompt(birth_date: NaiveDate, kin: &KinResult, descriptions: &DescriptionTable) -> String {
    format!(
        "You are an expert in Maya astrology and the Tzolk'in calendar.\n\
         \n\
         Write a personalized interpretation for a person with the following birth data:\n\
         - Birth date: {date}\n\
         - Kin number: {kin}\n\
         - Day-sign (nahual): {sign} ({sign_desc})\n\
         - Galactic tone: {tone} ({tone_desc})\n\
         \n\
         Address the person directly as \"you\" in 150 to 200 words and cover:\n\
         1. Their spiritual traits and potential.\n\
         2. Their life purpose as framed by the combination of {sign} and tone {tone}.\n\
         3. How the day-sign and the tone reinforce each other.\n\
         4. Practical guidance for modern daily life.\n\
         \n\
         Use a warm, inspiring and respectful tone. Reply with the interpretation text only.",
        date = birth_date.format("%Y-%m-%d"),
        kin = kin.kin_number,
        sign = kin.day_sign,
        sign_desc = descriptions.day_sign(kin.day_sign),
        tone = kin.tone,
        tone_desc = descriptions.tone(kin.tone),
    )
}
