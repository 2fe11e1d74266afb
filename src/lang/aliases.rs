//! 별칭 테이블 - 현지어 표현 → 정식 명칭
//!
//! 모든 용어는 소문자(라틴) 또는 원문 문자(인도 문자)로 저장됩니다.
//! 조회 시 요청 언어 항목과 영어 항목을 함께 사용합니다.

use super::Language;

/// 한 언어의 별칭 묶음
#[derive(Debug)]
pub struct AliasEntry {
    pub canonical: &'static str,
    pub language: Language,
    pub terms: &'static [&'static str],
}

/// 별칭 테이블
#[derive(Debug)]
pub struct AliasTable {
    pub entries: &'static [AliasEntry],
}

impl AliasTable {
    /// (용어, 정식 명칭) 목록 - 해당 언어 + 영어
    pub fn terms(&self, language: Language) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries
            .iter()
            .filter(move |e| e.language == language || e.language == Language::En)
            .flat_map(|e| e.terms.iter().map(move |term| (*term, e.canonical)))
    }

    /// 정식 명칭의 현지어 표기 (첫 번째 용어)
    pub fn native(&self, canonical: &str, language: Language) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|e| e.language == language && e.canonical.eq_ignore_ascii_case(canonical))
            .and_then(|e| e.terms.first().copied())
    }

    /// 영어 용어로 정식 명칭 조회
    pub fn canonical_of(&self, term: &str) -> Option<&'static str> {
        let lower = term.to_lowercase();
        self.entries
            .iter()
            .find(|e| e.terms.iter().any(|t| *t == lower))
            .map(|e| e.canonical)
    }
}

macro_rules! alias {
    ($canonical:expr, $lang:ident, [$($term:expr),* $(,)?]) => {
        AliasEntry {
            canonical: $canonical,
            language: Language::$lang,
            terms: &[$($term),*],
        }
    };
}

// ============================================================================
// Sectors
// ============================================================================

pub static SECTORS: AliasTable = AliasTable {
    entries: &[
        alias!("E-Commerce", En, ["e-commerce", "ecommerce", "e commerce", "online shopping", "online retail"]),
        alias!("Fintech", En, ["fintech", "fin-tech", "financial technology", "payments", "digital payments"]),
        alias!("Edtech", En, ["edtech", "ed-tech", "edutech", "education", "e-learning", "online learning"]),
        alias!("Healthtech", En, ["healthtech", "health tech", "healthcare", "health"]),
        alias!("Logistics", En, ["logistics", "supply chain", "delivery", "shipping"]),
        alias!("Foodtech", En, ["foodtech", "food tech", "food delivery", "food", "restaurant"]),
        alias!("Mobility", En, ["mobility", "ride hailing", "ride-hailing", "electric vehicle", "ev", "transport"]),
        alias!("SaaS", En, ["saas", "enterprise software", "b2b software", "software"]),
        alias!("Agritech", En, ["agritech", "agri-tech", "agtech", "agriculture", "farming"]),
        alias!("Gaming", En, ["gaming", "esports", "games"]),
        alias!("Social Media", En, ["social media", "social network"]),
        alias!("Deeptech", En, ["deeptech", "deep tech", "artificial intelligence", "machine learning", "robotics", "ai"]),
        // Hindi
        alias!("Fintech", Hi, ["फिनटेक", "फिनटैक", "फाइनटेक", "वित्तीय प्रौद्योगिकी", "वित्तीय"]),
        alias!("Healthtech", Hi, ["हेल्थटेक", "हेल्थकेयर", "हेल्थ", "स्वास्थ्य"]),
        alias!("Edtech", Hi, ["एडटेक", "एजुकेशन", "शिक्षा", "शैक्षिक"]),
        alias!("E-Commerce", Hi, ["ई-कॉमर्स", "ईकॉमर्स", "ऑनलाइन शॉपिंग"]),
        alias!("Logistics", Hi, ["लॉजिस्टिक्स", "लॉजिस्टिक", "डिलीवरी"]),
        alias!("SaaS", Hi, ["सॉफ्टवेयर", "सास"]),
        alias!("Foodtech", Hi, ["फूडटेक", "फूड", "खाना", "रेस्टोरेंट"]),
        alias!("Agritech", Hi, ["एग्रीटेक", "कृषि", "खेती"]),
        alias!("Mobility", Hi, ["मोबिलिटी", "परिवहन"]),
        alias!("Gaming", Hi, ["गेमिंग"]),
        alias!("Social Media", Hi, ["सोशल मीडिया"]),
        alias!("Deeptech", Hi, ["डीपटेक", "कृत्रिम बुद्धिमत्ता"]),
        // Telugu
        alias!("Fintech", Te, ["ఫిన్‌టెక్", "ఫిన్టెక్"]),
        alias!("Edtech", Te, ["ఎడ్‌టెక్", "విద్య"]),
        alias!("Healthtech", Te, ["హెల్త్‌టెక్", "ఆరోగ్య"]),
        alias!("E-Commerce", Te, ["ఈ-కామర్స్", "ఇ-కామర్స్"]),
        alias!("Foodtech", Te, ["ఫుడ్‌టెక్", "ఆహార"]),
        alias!("Logistics", Te, ["లాజిస్టిక్స్"]),
        alias!("Agritech", Te, ["అగ్రిటెక్", "వ్యవసాయ"]),
        alias!("Mobility", Te, ["మొబిలిటీ"]),
        alias!("SaaS", Te, ["సాఫ్ట్‌వేర్"]),
        alias!("Gaming", Te, ["గేమింగ్"]),
        // Tamil
        alias!("Fintech", Ta, ["ஃபின்டெக்", "நிதி தொழில்நுட்பம்"]),
        alias!("Edtech", Ta, ["எட்டெக்", "கல்வி"]),
        alias!("Healthtech", Ta, ["ஹெல்த்டெக்", "சுகாதார"]),
        alias!("E-Commerce", Ta, ["இ-காமர்ஸ்", "மின் வணிகம்"]),
        alias!("Foodtech", Ta, ["ஃபுட்டெக்", "உணவு"]),
        alias!("Logistics", Ta, ["லாஜிஸ்டிக்ஸ்"]),
        alias!("Agritech", Ta, ["அக்ரிடெக்", "விவசாய"]),
        alias!("Mobility", Ta, ["மொபிலிட்டி"]),
        alias!("SaaS", Ta, ["மென்பொருள்"]),
        alias!("Gaming", Ta, ["கேமிங்"]),
        // Kannada
        alias!("Fintech", Kn, ["ಫಿನ್‌ಟೆಕ್", "ಫಿನ್ಟೆಕ್"]),
        alias!("Edtech", Kn, ["ಎಡ್‌ಟೆಕ್", "ಶಿಕ್ಷಣ"]),
        alias!("Healthtech", Kn, ["ಹೆಲ್ತ್‌ಟೆಕ್", "ಆರೋಗ್ಯ"]),
        alias!("E-Commerce", Kn, ["ಇ-ಕಾಮರ್ಸ್"]),
        alias!("Foodtech", Kn, ["ಫುಡ್‌ಟೆಕ್", "ಆಹಾರ"]),
        alias!("Logistics", Kn, ["ಲಾಜಿಸ್ಟಿಕ್ಸ್"]),
        alias!("Agritech", Kn, ["ಅಗ್ರಿಟೆಕ್", "ಕೃಷಿ"]),
        alias!("Mobility", Kn, ["ಮೊಬಿಲಿಟಿ"]),
        alias!("SaaS", Kn, ["ಸಾಫ್ಟ್‌ವೇರ್"]),
        alias!("Gaming", Kn, ["ಗೇಮಿಂಗ್"]),
        // Marathi
        alias!("Fintech", Mr, ["फिनटेक"]),
        alias!("Edtech", Mr, ["एडटेक", "शिक्षण"]),
        alias!("Healthtech", Mr, ["हेल्थटेक", "आरोग्य"]),
        alias!("E-Commerce", Mr, ["ई-कॉमर्स"]),
        alias!("Foodtech", Mr, ["फूडटेक", "अन्न"]),
        alias!("Logistics", Mr, ["लॉजिस्टिक्स"]),
        alias!("Agritech", Mr, ["एग्रीटेक", "कृषी", "शेती"]),
        alias!("Mobility", Mr, ["मोबिलिटी"]),
        alias!("SaaS", Mr, ["सॉफ्टवेअर"]),
        alias!("Gaming", Mr, ["गेमिंग"]),
        // Gujarati
        alias!("Fintech", Gu, ["ફિનટેક"]),
        alias!("Edtech", Gu, ["એડટેક", "શિક્ષણ"]),
        alias!("Healthtech", Gu, ["હેલ્થટેક", "આરોગ્ય"]),
        alias!("E-Commerce", Gu, ["ઈ-કોમર્સ"]),
        alias!("Foodtech", Gu, ["ફૂડટેક", "ખોરાક"]),
        alias!("Logistics", Gu, ["લોજિસ્ટિક્સ"]),
        alias!("Agritech", Gu, ["એગ્રીટેક", "કૃષિ", "ખેતી"]),
        alias!("Mobility", Gu, ["મોબિલિટી"]),
        alias!("SaaS", Gu, ["સોફ્ટવેર"]),
        alias!("Gaming", Gu, ["ગેમિંગ"]),
        // Bengali
        alias!("Fintech", Bn, ["ফিনটেক"]),
        alias!("Edtech", Bn, ["এডটেক", "শিক্ষা"]),
        alias!("Healthtech", Bn, ["হেলথটেক", "স্বাস্থ্য"]),
        alias!("E-Commerce", Bn, ["ই-কমার্স"]),
        alias!("Foodtech", Bn, ["ফুডটেক", "খাদ্য"]),
        alias!("Logistics", Bn, ["লজিস্টিকস"]),
        alias!("Agritech", Bn, ["এগ্রিটেক", "কৃষি"]),
        alias!("Mobility", Bn, ["মোবিলিটি"]),
        alias!("SaaS", Bn, ["সফটওয়্যার"]),
        alias!("Gaming", Bn, ["গেমিং"]),
    ],
};

// ============================================================================
// Cities / States
// ============================================================================

pub static CITIES: AliasTable = AliasTable {
    entries: &[
        alias!("Bangalore", En, ["bangalore", "bengaluru", "blr"]),
        alias!("Mumbai", En, ["mumbai", "bombay"]),
        alias!("Delhi", En, ["new delhi", "delhi"]),
        alias!("Gurgaon", En, ["gurgaon", "gurugram"]),
        alias!("Hyderabad", En, ["hyderabad"]),
        alias!("Pune", En, ["pune", "poona"]),
        alias!("Chennai", En, ["chennai", "madras"]),
        alias!("Ahmedabad", En, ["ahmedabad"]),
        alias!("Kolkata", En, ["kolkata", "calcutta"]),
        alias!("Jaipur", En, ["jaipur"]),
        alias!("Chandigarh", En, ["chandigarh"]),
        alias!("Indore", En, ["indore"]),
        alias!("Kochi", En, ["kochi", "cochin"]),
        alias!("Coimbatore", En, ["coimbatore"]),
        alias!("Lucknow", En, ["lucknow"]),
        alias!("Surat", En, ["surat"]),
        alias!("Vadodara", En, ["vadodara", "baroda"]),
        alias!("Nagpur", En, ["nagpur"]),
        alias!("Bhubaneswar", En, ["bhubaneswar"]),
        alias!("Visakhapatnam", En, ["visakhapatnam", "vizag"]),
        alias!("Thiruvananthapuram", En, ["thiruvananthapuram", "trivandrum"]),
        alias!("Mysore", En, ["mysore", "mysuru"]),
        // Hindi
        alias!("Bangalore", Hi, ["बेंगलुरु", "बेंगलूर", "बैंगलोर"]),
        alias!("Mumbai", Hi, ["मुंबई", "मुम्बई"]),
        alias!("Delhi", Hi, ["दिल्ली"]),
        alias!("Gurgaon", Hi, ["गुड़गांव", "गुरुग्राम"]),
        alias!("Hyderabad", Hi, ["हैदराबाद"]),
        alias!("Pune", Hi, ["पुणे"]),
        alias!("Chennai", Hi, ["चेन्नई", "चेन्नै"]),
        alias!("Ahmedabad", Hi, ["अहमदाबाद"]),
        alias!("Kolkata", Hi, ["कोलकाता"]),
        alias!("Jaipur", Hi, ["जयपुर"]),
        // Telugu
        alias!("Bangalore", Te, ["బెంగళూరు"]),
        alias!("Mumbai", Te, ["ముంబై"]),
        alias!("Delhi", Te, ["ఢిల్లీ"]),
        alias!("Hyderabad", Te, ["హైదరాబాద్"]),
        alias!("Chennai", Te, ["చెన్నై"]),
        alias!("Pune", Te, ["పూణే"]),
        alias!("Visakhapatnam", Te, ["విశాఖపట్నం"]),
        // Tamil
        alias!("Bangalore", Ta, ["பெங்களூரு"]),
        alias!("Mumbai", Ta, ["மும்பை"]),
        alias!("Delhi", Ta, ["டெல்லி"]),
        alias!("Hyderabad", Ta, ["ஹைதராபாத்"]),
        alias!("Chennai", Ta, ["சென்னை"]),
        alias!("Coimbatore", Ta, ["கோயம்புத்தூர்"]),
        // Kannada
        alias!("Bangalore", Kn, ["ಬೆಂಗಳೂರು"]),
        alias!("Mumbai", Kn, ["ಮುಂಬೈ"]),
        alias!("Delhi", Kn, ["ದೆಹಲಿ"]),
        alias!("Hyderabad", Kn, ["ಹೈದರಾಬಾದ್"]),
        alias!("Chennai", Kn, ["ಚೆನ್ನೈ"]),
        alias!("Mysore", Kn, ["ಮೈಸೂರು"]),
        // Marathi
        alias!("Mumbai", Mr, ["मुंबई"]),
        alias!("Pune", Mr, ["पुणे"]),
        alias!("Bangalore", Mr, ["बेंगळुरू", "बेंगलुरु"]),
        alias!("Delhi", Mr, ["दिल्ली"]),
        alias!("Nagpur", Mr, ["नागपूर"]),
        // Gujarati
        alias!("Ahmedabad", Gu, ["અમદાવાદ"]),
        alias!("Surat", Gu, ["સુરત"]),
        alias!("Vadodara", Gu, ["વડોદરા"]),
        alias!("Mumbai", Gu, ["મુંબઈ"]),
        alias!("Bangalore", Gu, ["બેંગલુરુ"]),
        alias!("Delhi", Gu, ["દિલ્હી"]),
        // Bengali
        alias!("Kolkata", Bn, ["কলকাতা"]),
        alias!("Bangalore", Bn, ["বেঙ্গালুরু"]),
        alias!("Mumbai", Bn, ["মুম্বাই"]),
        alias!("Delhi", Bn, ["দিল্লি"]),
    ],
};

pub static STATES: AliasTable = AliasTable {
    entries: &[
        alias!("Karnataka", En, ["karnataka"]),
        alias!("Maharashtra", En, ["maharashtra"]),
        alias!("Haryana", En, ["haryana"]),
        alias!("Delhi", En, ["delhi ncr", "ncr"]),
        alias!("Telangana", En, ["telangana"]),
        alias!("Tamil Nadu", En, ["tamil nadu", "tamilnadu"]),
        alias!("Gujarat", En, ["gujarat"]),
        alias!("West Bengal", En, ["west bengal"]),
        alias!("Rajasthan", En, ["rajasthan"]),
        alias!("Madhya Pradesh", En, ["madhya pradesh"]),
        alias!("Kerala", En, ["kerala"]),
        alias!("Uttar Pradesh", En, ["uttar pradesh"]),
        alias!("Odisha", En, ["odisha", "orissa"]),
        alias!("Andhra Pradesh", En, ["andhra pradesh"]),
        alias!("Karnataka", Hi, ["कर्नाटक", "करनाटक"]),
        alias!("Maharashtra", Hi, ["महाराष्ट्र"]),
        alias!("Tamil Nadu", Hi, ["तमिलनाडु", "तमिल नाडु"]),
        alias!("Telangana", Hi, ["तेलंगाना"]),
        alias!("West Bengal", Hi, ["पश्चिम बंगाल"]),
        alias!("Gujarat", Hi, ["गुजरात"]),
        alias!("Haryana", Hi, ["हरियाणा"]),
        alias!("Telangana", Te, ["తెలంగాణ"]),
        alias!("Andhra Pradesh", Te, ["ఆంధ్రప్రదేశ్"]),
        alias!("Karnataka", Te, ["కర్ణాటక"]),
        alias!("Tamil Nadu", Ta, ["தமிழ்நாடு"]),
        alias!("Kerala", Ta, ["கேரளா"]),
        alias!("Karnataka", Kn, ["ಕರ್ನಾಟಕ"]),
        alias!("Maharashtra", Mr, ["महाराष्ट्र"]),
        alias!("Gujarat", Gu, ["ગુજરાત"]),
        alias!("West Bengal", Bn, ["পশ্চিমবঙ্গ", "পশ্চিম বঙ্গ"]),
    ],
};

/// 도시 → 주
static CITY_STATES: &[(&str, &str)] = &[
    ("Bangalore", "Karnataka"),
    ("Mumbai", "Maharashtra"),
    ("Gurgaon", "Haryana"),
    ("Delhi", "Delhi"),
    ("Hyderabad", "Telangana"),
    ("Pune", "Maharashtra"),
    ("Chennai", "Tamil Nadu"),
    ("Ahmedabad", "Gujarat"),
    ("Kolkata", "West Bengal"),
    ("Jaipur", "Rajasthan"),
    ("Chandigarh", "Chandigarh"),
    ("Indore", "Madhya Pradesh"),
    ("Kochi", "Kerala"),
    ("Coimbatore", "Tamil Nadu"),
    ("Lucknow", "Uttar Pradesh"),
    ("Surat", "Gujarat"),
    ("Vadodara", "Gujarat"),
    ("Nagpur", "Maharashtra"),
    ("Bhubaneswar", "Odisha"),
    ("Visakhapatnam", "Andhra Pradesh"),
    ("Thiruvananthapuram", "Kerala"),
    ("Mysore", "Karnataka"),
];

/// 도시가 속한 주
pub fn state_of_city(city: &str) -> Option<&'static str> {
    CITY_STATES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(city))
        .map(|(_, state)| *state)
}

// ============================================================================
// Companies (현지어 → 영어)
// ============================================================================

pub static COMPANIES: AliasTable = AliasTable {
    entries: &[
        alias!("Swiggy", Hi, ["स्विगी", "स्विग्गी"]),
        alias!("Flipkart", Hi, ["फ्लिपकार्ट", "फ्लिप्कार्ट"]),
        alias!("Paytm", Hi, ["पेटीएम", "पेटिएम"]),
        alias!("Ola", Hi, ["ओला"]),
        alias!("Zomato", Hi, ["ज़ोमैटो", "जोमैटो"]),
        alias!("Uber", Hi, ["उबर"]),
        alias!("Grofers", Hi, ["ग्रोफर्स"]),
        alias!("Swiggy", Te, ["స్విగ్గీ", "స్విగ్గి"]),
        alias!("Flipkart", Te, ["ఫ్లిప్‌కార్ట్", "ఫ్లిప్కార్ట్"]),
        alias!("Paytm", Te, ["పేటీఎం"]),
        alias!("Ola", Te, ["ఓలా"]),
        alias!("Zomato", Te, ["జోమాటో"]),
        alias!("Swiggy", Ta, ["ஸ்விகி", "ஸ்விக்கி"]),
        alias!("Flipkart", Ta, ["ஃபிளிப்கார்ட்"]),
        alias!("Paytm", Ta, ["பேடிஎம்"]),
        alias!("Ola", Ta, ["ஓலா"]),
        alias!("Zomato", Ta, ["ஜொமேட்டோ"]),
        alias!("Swiggy", Kn, ["ಸ್ವಿಗ್ಗಿ", "ಸ್ವಿಗ್ಗೀ"]),
        alias!("Flipkart", Kn, ["ಫ್ಲಿಪ್ಕಾರ್ಟ್"]),
        alias!("Paytm", Kn, ["ಪೇಟಿಎಂ"]),
        alias!("Ola", Kn, ["ಓಲಾ"]),
        alias!("Zomato", Kn, ["ಜೋಮ್ಯಾಟೋ"]),
        alias!("Swiggy", Mr, ["स्विगी"]),
        alias!("Flipkart", Mr, ["फ्लिपकार्ट"]),
        alias!("Paytm", Mr, ["पेटीएम"]),
        alias!("Ola", Mr, ["ओला"]),
        alias!("Zomato", Mr, ["झोमॅटो"]),
        alias!("Swiggy", Gu, ["સ્વિગી"]),
        alias!("Flipkart", Gu, ["ફ્લિપકાર્ટ"]),
        alias!("Paytm", Gu, ["પેટીએમ"]),
        alias!("Ola", Gu, ["ઓલા"]),
        alias!("Zomato", Gu, ["ઝોમેટો"]),
        alias!("Swiggy", Bn, ["সুইগি", "স্উইগি"]),
        alias!("Flipkart", Bn, ["ফ্লিপকার্ট"]),
        alias!("Paytm", Bn, ["পেটিএম"]),
        alias!("Ola", Bn, ["ওলা"]),
        alias!("Zomato", Bn, ["জোমাটো"]),
    ],
};

/// 모든 언어에서 현지어 회사명 → 영어 이름 (텍스트 내 포함 여부)
pub fn reverse_transliterate(text: &str) -> Option<&'static str> {
    COMPANIES
        .entries
        .iter()
        .flat_map(|e| e.terms.iter().map(move |t| (*t, e.canonical)))
        .filter(|(term, _)| text.contains(term))
        .max_by_key(|(term, _)| term.chars().count())
        .map(|(_, canonical)| canonical)
}

// ============================================================================
// Unsupported sectors
// ============================================================================

pub static UNSUPPORTED_SECTORS: AliasTable = AliasTable {
    entries: &[
        alias!("Crypto", En, ["cryptocurrency", "crypto", "bitcoin"]),
        alias!("Blockchain", En, ["blockchain", "web3", "nft"]),
        alias!("Real Estate", En, ["real estate", "proptech"]),
        alias!("Biotech", En, ["biotech", "pharmaceutical", "pharma"]),
        alias!("Space Tech", En, ["space tech", "spacetech", "space technology"]),
        alias!("Crypto", Hi, ["क्रिप्टो", "बिटकॉइन"]),
        alias!("Blockchain", Hi, ["ब्लॉकचेन"]),
        alias!("Real Estate", Hi, ["रियल एस्टेट"]),
        alias!("Biotech", Hi, ["बायोटेक", "फार्मा"]),
        alias!("Space Tech", Hi, ["स्पेस टेक", "अंतरिक्ष"]),
        alias!("Crypto", Te, ["క్రిప్టో"]),
        alias!("Crypto", Ta, ["கிரிப்டோ"]),
        alias!("Crypto", Kn, ["ಕ್ರಿಪ್ಟೋ"]),
        alias!("Crypto", Mr, ["क्रिप्टो"]),
        alias!("Crypto", Gu, ["ક્રિપ્ટો"]),
        alias!("Crypto", Bn, ["ক্রিপ্টো"]),
    ],
};

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_include_english() {
        let terms: Vec<_> = SECTORS.terms(Language::Hi).collect();
        assert!(terms.contains(&("फिनटेक", "Fintech")));
        assert!(terms.contains(&("fintech", "Fintech")));
        // 다른 인도 언어 항목은 포함되지 않음
        assert!(!terms.contains(&("ফিনটেক", "Fintech")));
    }

    #[test]
    fn test_native_form() {
        assert_eq!(SECTORS.native("Fintech", Language::Hi), Some("फिनटेक"));
        assert_eq!(CITIES.native("bangalore", Language::Kn), Some("ಬೆಂಗಳೂರು"));
        assert_eq!(CITIES.native("Surat", Language::Ta), None);
    }

    #[test]
    fn test_state_of_city() {
        assert_eq!(state_of_city("bangalore"), Some("Karnataka"));
        assert_eq!(state_of_city("Gurgaon"), Some("Haryana"));
        assert_eq!(state_of_city("Atlantis"), None);
    }

    #[test]
    fn test_reverse_transliterate() {
        assert_eq!(reverse_transliterate("स्विगी क्या करती है"), Some("Swiggy"));
        assert_eq!(reverse_transliterate("ಓಲಾ ಬಗ್ಗೆ ಹೇಳಿ"), Some("Ola"));
        assert_eq!(reverse_transliterate("tell me about swiggy"), None);
    }

    #[test]
    fn test_canonical_of() {
        assert_eq!(SECTORS.canonical_of("EdTech"), Some("Edtech"));
        assert_eq!(UNSUPPORTED_SECTORS.canonical_of("web3"), Some("Blockchain"));
    }
}
