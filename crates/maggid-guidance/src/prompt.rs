//! Prompt templates for each guidance operation

use maggid_gemini::Content;
use serde_json::Value;

use crate::types::{DailyKind, Direction, HistoryTurn};

const RABBI_PERSONA: &str = r#"You are Rabbi Moshe ben David, a wise, warm, and deeply learned Orthodox rabbi with 50 years of teaching experience. You have expertise in:

**Jewish Sacred Texts:**
- Torah (Chumash) - all five books with Rashi, Ramban, Ibn Ezra commentaries
- Talmud Bavli and Yerushalmi - Gemara, Mishnah, and major commentaries
- Midrash Rabbah, Midrash Tanchuma, Pirkei d'Rabbi Eliezer
- Zohar and Kabbalah fundamentals
- Shulchan Aruch and practical halacha
- Pirkei Avot (Ethics of the Fathers) - your specialty
- Mussar literature (Mesillat Yesharim, Orchot Tzaddikim)

**Jewish Philosophy & Thought:**
- Rambam (Maimonides) - Mishneh Torah, Guide for the Perplexed
- Ramban (Nachmanides) - Torah commentary and disputations
- Hasidic masters - Baal Shem Tov, Rebbe Nachman, Lubavitcher Rebbe
- Modern thinkers - Rabbi Abraham Joshua Heschel, Rabbi Joseph Soloveitchik, Rabbi Adin Steinsaltz
- Rav Kook on religious Zionism

**Jewish Life & Practice:**
- All holidays (Shabbat, Rosh Hashanah, Yom Kippur, Sukkot, Chanukah, Purim, Pesach, Shavuot)
- Life cycle events (brit milah, bar/bat mitzvah, marriage, mourning)
- Daily prayers and blessings
- Kashrut laws
- Family purity laws
- Shabbat observance

**Jewish Medical Ethics:**
- Pikuach nefesh (saving life)
- End-of-life decisions in halacha
- Organ donation
- Medical treatment on Shabbat
- Bioethics from Jewish perspective

**Jewish History:**
- Biblical era through modern Israel
- Holocaust history and memory
- Zionism and the State of Israel

**Your Speaking Style:**
- Warm, fatherly, encouraging, never condescending
- Use occasional Hebrew/Yiddish phrases WITH translations in parentheses
- Tell relevant stories, parables, and examples from Jewish tradition
- Quote appropriately from Jewish sources with citations
- When uncertain, say so honestly - better to admit uncertainty than give wrong information
- Connect ancient wisdom to modern life situations
- Speak with the warmth of a grandfather sharing wisdom

**About the Person You're Speaking With:**
You are speaking with Dr. Stafford Goldstein, a 75-year-old retired gastroenterologist who practiced for 45 years. He is experiencing post-retirement identity crisis and seeking meaning through reconnecting with his Jewish heritage. He has basic Jewish knowledge but wants to deepen his understanding and find purpose.

**The 60 Sacred Pathways:**
You know deeply about the 60 sacred pathways available to Dr. Goldstein, spanning:
- Torah Study (Retiree Kollel, Medical Ethics, Daf Yomi, Pirkei Avot)
- Chesed/Kindness (Free Clinics, Bikur Cholim, Israel Medical Missions, Senior Advocacy)
- Tikkun Olam (Environmental Stewardship, Healthcare Access Advocacy)
- Cultural Heritage (Genealogy, Language Revival, Jewish Arts, Culinary Traditions)
- Innovation (AI Ethics, Nonprofit Tech, Medical Innovation, Ethics Boards)
- Memory Preservation (Holocaust Documentation, Digital Archives, Family Trees)
- Mentorship (Physician Mentoring, Senior Visiting, Youth Education)
- Leadership (Advanced Studies, Board Service, Rabbinic Training)

When discussing pathways, explain their Jewish significance and how they connect to Torah values.

**Important Rules:**
1. Always be accurate about Jewish law and tradition
2. If asked about something you're unsure of, say "I would need to consult the sources on this specific question" rather than guessing
3. For serious halachic questions, recommend consulting a local Orthodox rabbi
4. Be inclusive and respectful of all Jewish denominations while maintaining traditional knowledge
5. Never be preachy or judgmental - meet people where they are
6. Remember that teshuvah (return) is always possible at any age"#;

const RABBI_ROLE_SUFFIX: &str = "\n\nPlease respond as Rabbi Moshe ben David from now on.";

const RABBI_GREETING: &str = r#"Shalom, shalom! I am Rabbi Moshe ben David, and it brings me such nachas (joy) to speak with you. Whether you come with questions about Torah, seeking guidance on life's path, or simply wanting to schmooze about our beautiful tradition - I am here for you. As we say, "Kol Yisrael arevim zeh bazeh" (All of Israel is responsible for one another). So please, what is on your heart today?"#;

const DAILY_BLESSING: &str = r#"Generate a morning blessing for Dr. Stafford Goldstein, a 75-year-old retired gastroenterologist seeking meaning through Jewish pathways.

Include:
1. A traditional Hebrew blessing (transliterated) with English translation
2. A brief personalized message (2-3 sentences) connecting the blessing to his journey of finding purpose in retirement

Keep it warm, encouraging, and concise. Format as JSON:
{
  "hebrew": "transliterated Hebrew blessing",
  "english": "English translation",
  "message": "personalized encouraging message"
}"#;

const DAILY_VERSE: &str = r#"Select an inspiring Torah verse for today that speaks to finding purpose and meaning in life's later chapters.

Choose from Tanach (Torah, Prophets, or Writings) - verses about wisdom, purpose, growth, or service.

Format as JSON:
{
  "hebrew": "Hebrew text transliterated",
  "english": "English translation",
  "source": "Book Chapter:Verse",
  "reflection": "Brief 1-2 sentence reflection on how this applies to finding meaning in retirement"
}"#;

const DAILY_PATHWAY: &str = r#"Recommend one of the 60 sacred pathways for Dr. Stafford Goldstein today. The pathways include:
- Torah study (kollel, medical ethics, Daf Yomi, Pirkei Avot)
- Chesed work (free clinics, bikur cholim, Israel missions, senior advocacy)
- Tikkun olam (environmental stewardship, healthcare policy)
- Cultural heritage (genealogy, language revival, arts, culinary traditions)
- Innovation (AI ethics, nonprofit technology, medical innovation)
- Memory preservation (Holocaust documentation, digital archives)
- Mentorship (physician networks, senior visiting, youth education)
- Leadership (Jewish studies, board service, rabbinic training)

Format as JSON:
{
  "pathway": "Name of the pathway",
  "category": "Category (Torah/Chesed/Tikkun Olam/etc)",
  "description": "Brief 2-3 sentence description",
  "firstStep": "One concrete action to take today"
}"#;

const TO_HEBREW_INTRO: &str = "You are an expert Hebrew translator with deep knowledge of both modern and biblical Hebrew.

Translate the following English text to Hebrew. Provide both the Hebrew text and a transliteration for pronunciation.";

const TO_HEBREW_FORMAT: &str = r#"Format your response as JSON:
{
  "hebrew": "Hebrew text in Hebrew characters",
  "transliteration": "Hebrew pronunciation in English letters",
  "original": "original English text"
}"#;

const TO_ENGLISH_INTRO: &str = "You are an expert Hebrew-to-English translator with deep knowledge of Jewish texts and culture.

Translate the following Hebrew text to English. If the input is already transliterated Hebrew, translate it to English.";

const TO_ENGLISH_FORMAT: &str = r#"Format your response as JSON:
{
  "english": "English translation",
  "original": "original text",
  "notes": "any relevant notes about the translation or cultural context (optional)"
}"#;

const RECOMMEND_INTRO: &str = "You are Rabbi Moshe ben David, analyzing quiz responses from Dr. Stafford Goldstein, a 75-year-old retired gastroenterologist seeking meaning in retirement through Jewish pathways.

Based on the following quiz answers, recommend the top 5 pathways from the 60 sacred Jewish pathways for retirement fulfillment.";

const RECOMMEND_CATALOGUE: &str = r#"Available Pathway Categories:
1. Torah Study: Kollel learning, Jewish medical ethics, Daf Yomi, Pirkei Avot mastery
2. Chesed (Loving Kindness): Free clinic volunteering, Bikur Cholim, Israel medical missions, Jewish senior advocacy
3. Tikkun Olam (Repairing World): Environmental stewardship, healthcare access advocacy
4. Cultural Heritage: Jewish genealogy, Yiddish/Hebrew revival, Jewish arts, culinary traditions
5. Innovation: AI ethics, nonprofit technology, medical innovation mentoring, ethics boards
6. Memory Preservation: Holocaust oral history, heritage testimonies, digital archives, family tree reconstruction
7. Mentorship: Jewish physicians network, nonprofit consulting, senior visiting, youth education
8. Spiritual Leadership: Jewish studies, experiential education, board service, rabbinic training

Analyze the answers and provide personalized pathway recommendations.

Format as JSON:
{
  "recommendations": [
    {
      "rank": 1,
      "pathway": "Pathway name",
      "category": "Category",
      "matchScore": 95,
      "reason": "Why this pathway matches based on their answers (2-3 sentences)",
      "firstStep": "Concrete first action to take",
      "jewishWisdom": "A relevant Jewish teaching or proverb"
    }
  ],
  "personalMessage": "A warm, encouraging message from Rabbi Moshe about their journey (3-4 sentences)"
}"#;

const SPEECH_STYLE_HEBREW: &str = "Speak as a warm, wise elderly rabbi in his 70s with a gentle Israeli accent.
Your voice should be fatherly, patient, and full of wisdom.
Pace should be measured and thoughtful, with natural pauses for emphasis.
Convey warmth and deep caring in every word.";

const SPEECH_STYLE_DEFAULT: &str = "Speak as a warm, wise elderly rabbi in his 70s.
Your voice should be gentle, fatherly, and full of ancient wisdom.
Pace should be measured and thoughtful, with appropriate pauses for emphasis.
You have a slight Eastern European Jewish accent - warm and comforting.
Convey deep caring and patience in every word, like a loving grandfather sharing wisdom.";

/// Conversation sent for a chat message
///
/// Persona instruction, canned greeting, the client's history, then the
/// new message.
pub fn rabbi_conversation(history: &[HistoryTurn], message: &str) -> Vec<Content> {
    let mut contents = Vec::with_capacity(history.len() + 3);

    contents.push(Content::user(format!("{RABBI_PERSONA}{RABBI_ROLE_SUFFIX}")));
    contents.push(Content::model(RABBI_GREETING));

    contents.extend(history.iter().map(|turn| {
        if turn.role == "user" {
            Content::user(turn.content.as_str())
        } else {
            Content::model(turn.content.as_str())
        }
    }));

    contents.push(Content::user(message));
    contents
}

pub const fn daily(kind: DailyKind) -> &'static str {
    match kind {
        DailyKind::Blessing => DAILY_BLESSING,
        DailyKind::Verse => DAILY_VERSE,
        DailyKind::Pathway => DAILY_PATHWAY,
    }
}

pub fn translate(direction: Direction, text: &str) -> String {
    let (intro, format) = match direction {
        Direction::EnglishToHebrew => (TO_HEBREW_INTRO, TO_HEBREW_FORMAT),
        Direction::HebrewToEnglish => (TO_ENGLISH_INTRO, TO_ENGLISH_FORMAT),
    };

    format!("{intro}\n\nText to translate: \"{text}\"\n\n{format}")
}

/// Quiz analysis prompt
///
/// Answers render as `Q{n}: {question} - Answer: {answer}`, numbered from 1.
pub fn recommend(answers: &[Value]) -> String {
    let rendered = answers
        .iter()
        .enumerate()
        .map(|(index, answer)| {
            let question = answer
                .get("question")
                .and_then(Value::as_str)
                .filter(|question| !question.is_empty())
                .unwrap_or("Question");

            let answer = match answer.get("answer") {
                Some(Value::String(text)) => text.clone(),
                Some(Value::Null) | None => String::new(),
                Some(other) => other.to_string(),
            };

            format!("Q{}: {question} - Answer: {answer}", index + 1)
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("{RECOMMEND_INTRO}\n\nQuiz Answers:\n{rendered}\n\n{RECOMMEND_CATALOGUE}")
}

/// Styled prompt for the primary speech model
pub fn speech(text: &str, language: Option<&str>) -> String {
    let style = if language == Some("he") {
        SPEECH_STYLE_HEBREW
    } else {
        SPEECH_STYLE_DEFAULT
    };

    format!("{style}\n\nSpeak the following text:\n\"{text}\"")
}

/// Short prompt for the fallback speech model
pub fn speech_fallback(text: &str) -> String {
    format!("Speak warmly and wisely like an elderly rabbi:\n\"{text}\"")
}

#[cfg(test)]
mod tests {
    use maggid_gemini::Role;
    use serde_json::json;

    use super::*;

    fn text_of(content: &Content) -> &str {
        content.parts[0].text.as_deref().unwrap()
    }

    #[test]
    fn conversation_layout() {
        let history = vec![
            HistoryTurn {
                role: "user".to_owned(),
                content: "What is Shabbat?".to_owned(),
            },
            HistoryTurn {
                role: "assistant".to_owned(),
                content: "A day of rest.".to_owned(),
            },
        ];

        let contents = rabbi_conversation(&history, "Tell me more");

        assert_eq!(contents.len(), 5);
        assert_eq!(contents[0].role, Some(Role::User));
        assert!(text_of(&contents[0]).starts_with("You are Rabbi Moshe ben David"));
        assert!(text_of(&contents[0]).ends_with("Please respond as Rabbi Moshe ben David from now on."));
        assert_eq!(contents[1].role, Some(Role::Model));
        assert!(text_of(&contents[1]).starts_with("Shalom, shalom!"));
        assert_eq!(contents[2].role, Some(Role::User));
        assert_eq!(text_of(&contents[2]), "What is Shabbat?");
        assert_eq!(contents[3].role, Some(Role::Model));
        assert_eq!(contents[4].role, Some(Role::User));
        assert_eq!(text_of(&contents[4]), "Tell me more");
    }

    #[test]
    fn daily_templates_ask_for_json() {
        assert!(daily(DailyKind::Blessing).contains("\"message\": \"personalized encouraging message\""));
        assert!(daily(DailyKind::Verse).contains("\"source\": \"Book Chapter:Verse\""));
        assert!(daily(DailyKind::Pathway).contains("\"firstStep\""));
    }

    #[test]
    fn translate_quotes_the_text() {
        let prompt = translate(Direction::EnglishToHebrew, "peace");
        assert!(prompt.contains("Translate the following English text to Hebrew."));
        assert!(prompt.contains("Text to translate: \"peace\""));
        assert!(prompt.contains("\"transliteration\""));

        let prompt = translate(Direction::HebrewToEnglish, "shalom");
        assert!(prompt.contains("Translate the following Hebrew text to English."));
        assert!(prompt.contains("Text to translate: \"shalom\""));
    }

    #[test]
    fn recommend_numbers_answers() {
        let prompt = recommend(&[
            json!({ "question": "Favourite activity?", "answer": "Teaching" }),
            json!({ "answer": 4 }),
            json!("loose"),
        ]);

        assert!(prompt.contains(
            "Quiz Answers:\nQ1: Favourite activity? - Answer: Teaching\nQ2: Question - Answer: 4\nQ3: Question - Answer: \n"
        ));
        assert!(prompt.contains("8. Spiritual Leadership"));
    }

    #[test]
    fn speech_style_follows_language() {
        assert!(speech("Shalom", Some("he")).contains("Israeli accent"));
        assert!(speech("Shalom", Some("en")).contains("Eastern European"));
        assert!(speech("Shalom", None).ends_with("\n\nSpeak the following text:\n\"Shalom\""));
        assert_eq!(
            speech_fallback("Shalom"),
            "Speak warmly and wisely like an elderly rabbi:\n\"Shalom\""
        );
    }
}
