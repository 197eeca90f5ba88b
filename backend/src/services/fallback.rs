//! Deterministic interpretation used when no generated text is available.
//!
//! Three fixed tables feed a five-paragraph template: a header, the kin
//! paragraph (life-stage band), the day-sign paragraph (advice), the tone
//! paragraph (characteristic) and a closing paragraph. Every lookup has a
//! default branch, so composing never fails.

use std::ops::RangeInclusive;

use crate::models::{DaySign, KinNumber, KinResult, Tone};

/// Life-stage bands partitioning kin numbers 1..=260 into four quarters.
pub const LIFE_STAGE_BANDS: [(RangeInclusive<u16>, &str); 4] = [
    (
        1..=65,
        "Your kin sits in the first quarter of the Tzolk'in, the season of seeding. \
         You came to initiate: to plant new ideas and open paths that others will later walk.",
    ),
    (
        66..=130,
        "Your kin sits in the second quarter of the Tzolk'in, the season of growth. \
         Your journey is about nurturing what has been started, building bonds and refining your gifts through experience.",
    ),
    (
        131..=195,
        "Your kin sits in the third quarter of the Tzolk'in, the season of harvest. \
         You are here to bring ideas into form and share the fruits of your work with the people around you.",
    ),
    (
        196..=260,
        "Your kin sits in the last quarter of the Tzolk'in, the season of completion. \
         You carry the memory of many cycles and are called to integrate, to teach and to prepare the ground for renewal.",
    ),
];

const GENERIC_TONE_CHARACTERISTIC: &str =
    "Your tone carries a steady, guiding rhythm that helps you find your own pace.";

const GENERIC_DAY_SIGN_ADVICE: &str =
    "Trust the energy of your day-sign and let it guide your daily choices.";

const HEADER: &str = "Your Maya Astrology Reading";

const CLOSING: &str = "These energies describe potentials, not a fixed destiny. \
    Revisit them when you face an important choice, notice the days that resonate with your sign, \
    and let the rhythm of the Tzolk'in remind you that every ending prepares a new beginning.";

/// Narrative for the band containing `kin`.
pub fn life_stage_narrative(kin: KinNumber) -> &'static str {
    LIFE_STAGE_BANDS
        .iter()
        .find(|(band, _)| band.contains(&kin.value()))
        .map(|(_, text)| *text)
        .unwrap_or(LIFE_STAGE_BANDS[LIFE_STAGE_BANDS.len() - 1].1)
}

/// Characteristic sentence for a raw tone number; values outside 1..=13 get a
/// generic sentence.
pub fn tone_characteristic_for(tone: u8) -> &'static str {
    match tone {
        1 => "The Magnetic tone gives you the power to unify people around a clear purpose.",
        2 => "The Lunar tone teaches you to hold opposites in balance and grow through challenge.",
        3 => "The Electric tone makes you a catalyst who activates and serves others.",
        4 => "The Self-Existing tone gives you a gift for defining forms and building solid structures.",
        5 => "The Overtone grants you radiance and the strength to empower those around you.",
        6 => "The Rhythmic tone seeks equality and organizes life with a calm, balanced pulse.",
        7 => "The Resonant tone tunes you to inner guidance, making you a channel for inspiration.",
        8 => "The Galactic tone asks you to live in integrity, aligning what you believe with what you do.",
        9 => "The Solar tone fuels your intentions and gives you the drive to see plans through.",
        10 => "The Planetary tone helps you manifest ideas in the material world and perfect them.",
        11 => "The Spectral tone frees you to release what no longer serves and dissolve old patterns.",
        12 => "The Crystal tone makes you a natural collaborator, dedicated to shared work.",
        13 => "The Cosmic tone carries presence and endurance, the ability to transcend and complete cycles.",
        _ => GENERIC_TONE_CHARACTERISTIC,
    }
}

pub fn tone_characteristic(tone: Tone) -> &'static str {
    tone_characteristic_for(tone.value())
}

pub fn day_sign_advice(sign: DaySign) -> &'static str {
    match sign {
        DaySign::Imix => "Nurture new beginnings and trust your instinct to create and provide.",
        DaySign::Ik => "Speak your truth clearly; your words carry the breath of inspiration.",
        DaySign::Akbal => "Spend time in stillness; your inner night holds the answers you seek.",
        DaySign::Kan => "Plant seeds patiently and tend them; your abundance grows with care.",
        DaySign::Chicchan => "Follow your vital energy and instincts, and keep your body in motion.",
        DaySign::Cimi => "Welcome change and let go gracefully; every release makes room for renewal.",
        DaySign::Manik => "Offer your hands to heal and help; practical service is your path.",
        DaySign::Lamat => "Let harmony and gratitude multiply what you already have.",
        DaySign::Muluk => "Honor your emotions and let them flow; water purifies and reconnects.",
        DaySign::Oc => "Stay loyal to your heart and to those you love; guidance comes through devotion.",
        DaySign::Chuen => "Play and create freely; your joy and artistry open unexpected doors.",
        DaySign::Eb => "Walk your path with humility and stay of service to your community.",
        DaySign::Ben => "Explore boldly and grow toward the light, linking earth and sky.",
        DaySign::Ix => "Trust your intuition and your connection with nature's hidden wisdom.",
        DaySign::Men => "Keep a wide vision and aim high; your perspective is your strength.",
        DaySign::Cib => "Listen to the wisdom of your ancestors and forgive what holds you back.",
        DaySign::Caban => "Stay grounded and in sync with the earth's rhythms as you move forward.",
        DaySign::Etznab => "Cut through illusion with honesty, and use your clarity to make decisions.",
        DaySign::Cauac => "Embrace storms as purification; transformation renews your life force.",
        DaySign::Ahau => "Let your light shine and share your wisdom with compassion.",
    }
}

/// Advice for a day-sign given by name; unknown names get a generic sentence.
pub fn day_sign_advice_for_name(name: &str) -> &'static str {
    name.parse::<DaySign>()
        .map(day_sign_advice)
        .unwrap_or(GENERIC_DAY_SIGN_ADVICE)
}

/// Compose the full fallback interpretation for a kin result.
pub fn compose_fallback(kin: &KinResult) -> String {
    let intro = format!(
        "According to the Tzolk'in, the sacred 260-day calendar of the Maya, \
         your birth on {} carries its own energetic signature.",
        kin.gregorian_date.format("%Y-%m-%d")
    );
    let kin_paragraph = format!(
        "You were born on Kin {}. {}",
        kin.kin_number,
        life_stage_narrative(kin.kin_number)
    );
    let sign_paragraph = format!(
        "Your day-sign is {}. {}",
        kin.day_sign,
        day_sign_advice(kin.day_sign)
    );
    let tone_paragraph = format!(
        "Your galactic tone is {}. {}",
        kin.tone,
        tone_characteristic(kin.tone)
    );

    [
        HEADER,
        intro.as_str(),
        kin_paragraph.as_str(),
        sign_paragraph.as_str(),
        tone_paragraph.as_str(),
        CLOSING,
    ]
    .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn kin_result(kin: u16, sign: DaySign, tone: u8) -> KinResult {
        KinResult {
            kin_number: KinNumber::new(kin).unwrap(),
            day_sign: sign,
            tone: Tone::new(tone).unwrap(),
            gregorian_date: NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
        }
    }

    #[test]
    fn test_bands_partition_the_round_without_gaps_or_overlaps() {
        for kin in 1..=260u16 {
            let hits = LIFE_STAGE_BANDS
                .iter()
                .filter(|(band, _)| band.contains(&kin))
                .count();
            assert_eq!(hits, 1, "kin {} is in {} bands", kin, hits);
        }
        assert_eq!(*LIFE_STAGE_BANDS[0].0.start(), 1);
        assert_eq!(*LIFE_STAGE_BANDS[3].0.end(), 260);
        for pair in LIFE_STAGE_BANDS.windows(2) {
            assert_eq!(*pair[0].0.end() + 1, *pair[1].0.start());
        }
    }

    #[test]
    fn test_band_boundaries_are_inclusive() {
        let narrative = |k: u16| life_stage_narrative(KinNumber::new(k).unwrap());
        assert_eq!(narrative(1), LIFE_STAGE_BANDS[0].1);
        assert_eq!(narrative(65), LIFE_STAGE_BANDS[0].1);
        assert_eq!(narrative(66), LIFE_STAGE_BANDS[1].1);
        assert_eq!(narrative(130), LIFE_STAGE_BANDS[1].1);
        assert_eq!(narrative(131), LIFE_STAGE_BANDS[2].1);
        assert_eq!(narrative(195), LIFE_STAGE_BANDS[2].1);
        assert_eq!(narrative(196), LIFE_STAGE_BANDS[3].1);
        assert_eq!(narrative(260), LIFE_STAGE_BANDS[3].1);
    }

    #[test]
    fn test_every_tone_has_a_distinct_characteristic() {
        let texts: std::collections::HashSet<_> = Tone::all().map(tone_characteristic).collect();
        assert_eq!(texts.len(), 13);
        assert!(!texts.contains(GENERIC_TONE_CHARACTERISTIC));
        assert_eq!(tone_characteristic_for(0), GENERIC_TONE_CHARACTERISTIC);
        assert_eq!(tone_characteristic_for(14), GENERIC_TONE_CHARACTERISTIC);
    }

    #[test]
    fn test_every_day_sign_has_distinct_advice() {
        let texts: std::collections::HashSet<_> =
            DaySign::ALL.iter().map(|s| day_sign_advice(*s)).collect();
        assert_eq!(texts.len(), 20);
        assert!(!texts.contains(GENERIC_DAY_SIGN_ADVICE));
        assert_eq!(day_sign_advice_for_name("Lamat"), day_sign_advice(DaySign::Lamat));
        assert_eq!(day_sign_advice_for_name("Quetzal"), GENERIC_DAY_SIGN_ADVICE);
    }

    #[test]
    fn test_template_structure_and_order() {
        let kin = kin_result(147, DaySign::Ix, 4);
        let text = compose_fallback(&kin);
        let paragraphs: Vec<&str> = text.split("\n\n").collect();

        assert_eq!(paragraphs.len(), 6);
        assert_eq!(paragraphs[0], HEADER);
        assert!(paragraphs[1].contains("1990-06-15"));
        assert!(paragraphs[2].starts_with("You were born on Kin 147."));
        assert!(paragraphs[2].contains(LIFE_STAGE_BANDS[2].1));
        assert!(paragraphs[3].starts_with("Your day-sign is Ix."));
        assert!(paragraphs[3].contains(day_sign_advice(DaySign::Ix)));
        assert!(paragraphs[4].starts_with("Your galactic tone is 4."));
        assert!(paragraphs[4].contains(tone_characteristic_for(4)));
        assert_eq!(paragraphs[5], CLOSING);
    }

    #[test]
    fn test_each_lookup_used_exactly_once() {
        let kin = kin_result(12, DaySign::Eb, 12);
        let text = compose_fallback(&kin);
        assert_eq!(text.matches(LIFE_STAGE_BANDS[0].1).count(), 1);
        assert_eq!(text.matches(day_sign_advice(DaySign::Eb)).count(), 1);
        assert_eq!(text.matches(tone_characteristic_for(12)).count(), 1);
    }

    #[test]
    fn test_fallback_covers_all_tones_signs_and_bands() {
        for (band_index, kin) in [30u16, 100, 150, 240].into_iter().enumerate() {
            for sign in DaySign::ALL {
                for tone in Tone::all() {
                    let result = kin_result(kin, sign, tone.value());
                    let text = compose_fallback(&result);
                    assert!(!text.is_empty());
                    assert!(text.contains(LIFE_STAGE_BANDS[band_index].1));
                    assert!(text.contains(day_sign_advice(sign)));
                    assert!(text.contains(tone_characteristic(tone)));
                }
            }
        }
    }
}
