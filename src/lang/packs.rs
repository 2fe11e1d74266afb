//! 언어별 정적 테이블
//!
//! 키워드는 모두 소문자입니다. 영어 키워드는 분석기가 모든 언어에 함께 적용하므로
//! 다른 언어 테이블에는 고유 표현만 둡니다.

use super::{Keywords, Labels, Language, LanguagePack, Messages, Prompts};

// ============================================================================
// English
// ============================================================================

pub static EN: LanguagePack = LanguagePack {
    language: Language::En,
    labels: Labels {
        total_funding: "Total Funding",
        total_companies: "Total Companies",
        deals: "Deals",
        average: "Average Deal",
        top_sectors: "Top Sectors",
        comparison: "Comparison",
        year: "Year",
        sector: "Sector",
        companies: "companies",
        companies_heading: "Companies",
        funding: "Funding",
        growth: "Growth",
        total: "Total",
        crores: "Cr",
        funding_summary: "Funding Summary",
        rounds: "Number of Rounds",
        primary_sector: "Primary Sector",
        location: "Location",
        funding_rounds: "Funding Rounds",
        from: "from",
        most_funded: "Most Funded Company",
        largest_round: "Largest Round",
    },
    keywords: Keywords {
        comparison: &[
            "compare",
            "compared",
            "comparing",
            "comparison",
            "vs",
            "vs.",
            "versus",
            "difference between",
            "growth",
            "trend",
            "trends",
        ],
        aggregation: &[
            "total",
            "how much",
            "how many",
            "count",
            "sum",
            "average",
            "avg",
            "number of",
            "overall",
        ],
        ranked_list: &[
            "top",
            "largest",
            "biggest",
            "highest",
            "lowest",
            "smallest",
            "latest",
            "most recent",
            "most funded",
            "top funded",
        ],
        highest: &[
            "highest",
            "largest",
            "biggest",
            "top",
            "maximum",
            "most funded",
            "top funded",
        ],
        lowest: &["lowest", "smallest", "least", "minimum", "cheapest"],
        recent: &["latest", "most recent", "recent", "newest"],
        most_funded: &[
            "most funded",
            "top funded",
            "highest funded",
            "best funded",
            "most funding",
        ],
        list_nouns: &["companies", "startups", "deals", "rounds", "firms"],
        above_before: &[
            "above",
            "over",
            "more than",
            "greater than",
            "at least",
            "exceeding",
            "minimum of",
        ],
        below_before: &[
            "below",
            "under",
            "less than",
            "up to",
            "upto",
            "at most",
            "maximum of",
        ],
        above_after: &["or more", "and above", "plus"],
        below_after: &["or less", "and below"],
        unknown_words: &["unknown", "not disclosed", "undisclosed", "n/a"],
    },
    messages: Messages {
        out_of_range: "Sorry, this dataset only covers {min}-{max}. Data for {year} is not available.",
        no_results: "Sorry, no relevant information found in {min}-{max} dataset. Please try:\n- Rephrasing your question\n- Using full company name\n- Changing sector or city",
        unsupported_sector: "Sorry, the dataset does not cover the {sector} sector. Supported sectors: {supported}.",
        not_in_dataset: "⚠️ Note: This company is not present in our funding database (covering {min}-{max}). The above information is general knowledge about the company.",
        company_description: "A {sector} company",
        generic_description: "A startup company",
        growth_unavailable: "Growth cannot be computed (no funding recorded for {a}).",
    },
    prompts: Prompts {
        company_lookup: "In 1-2 sentences, what does {company} do? Focus on their business sector and main service.",
        task: "Based on the data below, provide a comprehensive answer to the question.",
        data: "DATA",
        question: "QUESTION",
        instructions_header: "INSTRUCTIONS",
        instructions: &[
            "Use ONLY the data provided, never add facts that are not in the data",
            "Start with summary: \"Total X companies, ₹Y Cr total funding\"",
            "Then list each company: Name • Amount • Date • Sector • City",
            "NEVER write \"Unknown\", omit missing information",
            "Use numbered list (1. 2. 3.)",
        ],
        answer: "ANSWER",
        script: "English",
    },
};

// ============================================================================
// Hindi
// ============================================================================

pub static HI: LanguagePack = LanguagePack {
    language: Language::Hi,
    labels: Labels {
        total_funding: "कुल फंडिंग",
        total_companies: "कुल कंपनियां",
        deals: "सौदे",
        average: "औसत",
        top_sectors: "शीर्ष क्षेत्र",
        comparison: "तुलना",
        year: "वर्ष",
        sector: "क्षेत्र",
        companies: "कंपनियां",
        companies_heading: "कंपनियां",
        funding: "फंडिंग",
        growth: "वृद्धि",
        total: "कुल",
        crores: "करोड़",
        funding_summary: "फंडिंग सारांश",
        rounds: "राउंड्स",
        primary_sector: "सेक्टर",
        location: "स्थान",
        funding_rounds: "फंडिंग राउंड्स",
        from: "से",
        most_funded: "सबसे ज्यादा फंडिंग वाली कंपनी",
        largest_round: "सबसे बड़ा राउंड",
    },
    keywords: Keywords {
        comparison: &["तुलना", "बनाम", "अंतर", "रुझान", "वृद्धि"],
        aggregation: &["कुल", "कितना", "कितने", "कितनी", "औसत", "संख्या"],
        ranked_list: &[
            "टॉप",
            "शीर्ष",
            "सबसे बड़ी",
            "सबसे बड़े",
            "सबसे ज्यादा",
            "सबसे अधिक",
            "सबसे कम",
            "नवीनतम",
        ],
        highest: &[
            "सबसे ज्यादा",
            "सबसे अधिक",
            "सबसे बड़ी",
            "सबसे बड़े",
            "टॉप",
            "शीर्ष",
            "अधिकतम",
        ],
        lowest: &["सबसे कम", "सबसे छोटी", "न्यूनतम"],
        recent: &["नवीनतम", "हाल ही", "ताज़ा"],
        most_funded: &["सबसे ज्यादा फंडिंग", "सबसे अधिक फंडिंग", "सबसे ज्यादा फंडेड"],
        list_nouns: &["कंपनियां", "कंपनियों", "कंपनी", "स्टार्टअप"],
        above_before: &["कम से कम"],
        below_before: &["अधिकतम"],
        above_after: &["से ज्यादा", "से अधिक", "से ऊपर"],
        below_after: &["से कम", "से नीचे", "तक"],
        unknown_words: &["अज्ञात", "जानकारी नहीं"],
    },
    messages: Messages {
        out_of_range: "क्षमा करें, यह डेटासेट केवल {min}-{max} की जानकारी है। {year} का डेटा उपलब्ध नहीं है।",
        no_results: "क्षमा करें, {min}-{max} के डेटासेट में इस प्रश्न के लिए कोई प्रासंगिक जानकारी नहीं मिली। कृपया:\n- अलग शब्दों में पूछें\n- कंपनी का पूरा नाम बताएं\n- सेक्टर या शहर बदलकर देखें",
        unsupported_sector: "क्षमा करें, इस डेटासेट में {sector} सेक्टर की जानकारी नहीं है। उपलब्ध सेक्टर: {supported}।",
        not_in_dataset: "⚠️ नोट: यह कंपनी हमारे फंडिंग डेटाबेस ({min}-{max}) में नहीं है। ऊपर दी गई जानकारी कंपनी के बारे में सामान्य ज्ञान है।",
        company_description: "{sector} सेक्टर की कंपनी",
        generic_description: "एक स्टार्टअप कंपनी",
        growth_unavailable: "वृद्धि की गणना संभव नहीं ({a} में कोई फंडिंग नहीं)।",
    },
    prompts: Prompts {
        company_lookup: "{company} क्या करती है? 1-2 वाक्यों में बताएं - उनका व्यवसाय और मुख्य सेवा।",
        task: "नीचे दिए गए डेटा के आधार पर प्रश्न का पूर्ण उत्तर हिंदी में दें।",
        data: "डेटा",
        question: "प्रश्न",
        instructions_header: "निर्देश",
        instructions: &[
            "केवल दिए गए डेटा का उपयोग करें",
            "सभी नाम देवनागरी में लिखें (Swiggy→स्विगी, Bangalore→बेंगलुरु, Mumbai→मुंबई)",
            "पहले सारांश: \"कुल X कंपनियां, ₹Y करोड़ कुल फंडिंग\"",
            "\"Unknown\" या \"अज्ञात\" कभी मत लिखो",
            "संख्याओं में सूची बनाएं (1. 2. 3.)",
        ],
        answer: "उत्तर",
        script: "Devanagari Hindi",
    },
};

// ============================================================================
// Telugu
// ============================================================================

pub static TE: LanguagePack = LanguagePack {
    language: Language::Te,
    labels: Labels {
        total_funding: "మొత్తం ఫండింగ్",
        total_companies: "మొత్తం కంపెనీలు",
        deals: "డీల్స్",
        average: "సగటు",
        top_sectors: "టాప్ రంగాలు",
        comparison: "పోలిక",
        year: "సంవత్సరం",
        sector: "రంగం",
        companies: "కంపెనీలు",
        companies_heading: "కంపెనీలు",
        funding: "ఫండింగ్",
        growth: "పెరుగుదల",
        total: "మొత్తం",
        crores: "కోట్లు",
        funding_summary: "ఫండింగ్ సారాంశం",
        rounds: "రౌండ్లు",
        primary_sector: "రంగం",
        location: "ప్రదేశం",
        funding_rounds: "ఫండింగ్ రౌండ్లు",
        from: "నుండి",
        most_funded: "అత్యధిక ఫండింగ్ పొందిన కంపెనీ",
        largest_round: "అతిపెద్ద రౌండ్",
    },
    keywords: Keywords {
        comparison: &["పోల్చండి", "పోలిక", "తేడా", "ధోరణి", "పెరుగుదల"],
        aggregation: &["మొత్తం", "ఎంత", "ఎన్ని", "సగటు"],
        ranked_list: &["టాప్", "అత్యధిక", "అతిపెద్ద", "అత్యల్ప", "తాజా"],
        highest: &["అత్యధిక", "అతిపెద్ద", "టాప్", "ఎక్కువ"],
        lowest: &["అత్యల్ప", "తక్కువ", "చిన్న"],
        recent: &["తాజా", "ఇటీవలి"],
        most_funded: &["అత్యధిక ఫండింగ్", "ఎక్కువ ఫండింగ్"],
        list_nouns: &["కంపెనీలు", "స్టార్టప్‌లు", "కంపెనీ"],
        above_before: &[],
        below_before: &[],
        above_after: &["కంటే ఎక్కువ", "పైగా"],
        below_after: &["కంటే తక్కువ", "లోపు"],
        unknown_words: &["తెలియదు", "సమాచారం లేదు"],
    },
    messages: Messages {
        out_of_range: "క్షమించండి, ఈ డేటాసెట్ {min}-{max} మాత్రమే. {year} డేటా అందుబాటులో లేదు.",
        no_results: "క్షమించండి, {min}-{max} డేటాసెట్‌లో ఈ ప్రశ్నకు సంబంధిత సమాచారం దొరకలేదు. దయచేసి:\n- వేరే పదాలలో అడగండి\n- కంపెనీ పూర్తి పేరు చెప్పండి\n- సెక్టార్ లేదా నగరం మార్చండి",
        unsupported_sector: "క్షమించండి, ఈ డేటాసెట్‌లో {sector} రంగం సమాచారం లేదు. అందుబాటులో ఉన్న రంగాలు: {supported}.",
        not_in_dataset: "⚠️ గమనిక: ఈ కంపెనీ మా ఫండింగ్ డేటాబేస్ ({min}-{max})లో లేదు. పైన ఇవ్వబడిన సమాచారం కంపెనీ గురించి సాధారణ జ్ఞానం.",
        company_description: "{sector} రంగం కంపెనీ",
        generic_description: "ఒక స్టార్టప్ కంపెనీ",
        growth_unavailable: "పెరుగుదల లెక్కించలేము ({a}లో ఫండింగ్ లేదు).",
    },
    prompts: Prompts {
        company_lookup: "{company} ఏమి చేస్తుంది? 1-2 వాక్యాలలో చెప్పండి - వారి వ్యాపారం మరియు ప్రధాన సేవ.",
        task: "క్రింది డేటా ఆధారంగా ప్రశ్నకు పూర్తి సమాధానం తెలుగులో ఇవ్వండి.",
        data: "డేటా",
        question: "ప్రశ్న",
        instructions_header: "సూచనలు",
        instructions: &[
            "ఇచ్చిన డేటాను మాత్రమే ఉపయోగించండి",
            "అన్ని పేర్లను తెలుగు లిపిలో రాయండి (Swiggy→స్విగ్గీ, Bangalore→బెంగళూరు, Mumbai→ముంబై)",
            "మొదట సారాంశం: \"మొత్తం X కంపెనీలు, ₹Y కోట్లు మొత్తం ఫండింగ్\"",
            "\"Unknown\" లేదా \"తెలియదు\" అని ఎప్పుడూ రాయకండి",
            "సంఖ్యలతో జాబితా చేయండి (1. 2. 3.)",
        ],
        answer: "సమాధానం",
        script: "Telugu",
    },
};

// ============================================================================
// Tamil
// ============================================================================

pub static TA: LanguagePack = LanguagePack {
    language: Language::Ta,
    labels: Labels {
        total_funding: "மொத்த நிதி",
        total_companies: "மொத்த நிறுவனங்கள்",
        deals: "ஒப்பந்தங்கள்",
        average: "சராசரி",
        top_sectors: "முதன்மை துறைகள்",
        comparison: "ஒப்பீடு",
        year: "ஆண்டு",
        sector: "துறை",
        companies: "நிறுவனங்கள்",
        companies_heading: "நிறுவனங்கள்",
        funding: "நிதி",
        growth: "வளர்ச்சி",
        total: "மொத்தம்",
        crores: "கோடி",
        funding_summary: "நிதி சுருக்கம்",
        rounds: "சுற்றுகள்",
        primary_sector: "துறை",
        location: "இடம்",
        funding_rounds: "நிதி சுற்றுகள்",
        from: "இருந்து",
        most_funded: "அதிக நிதி பெற்ற நிறுவனம்",
        largest_round: "மிகப்பெரிய சுற்று",
    },
    keywords: Keywords {
        comparison: &["ஒப்பிடுங்கள்", "ஒப்பீடு", "வித்தியாசம்", "போக்கு", "வளர்ச்சி"],
        aggregation: &["மொத்தம்", "மொத்த", "எவ்வளவு", "எத்தனை", "சராசரி"],
        ranked_list: &["டாப்", "அதிக", "மிகப்பெரிய", "குறைந்த", "சமீபத்திய"],
        highest: &["அதிக", "மிகப்பெரிய", "டாப்"],
        lowest: &["குறைந்த", "மிகச்சிறிய"],
        recent: &["சமீபத்திய", "புதிய"],
        most_funded: &["அதிக நிதி"],
        list_nouns: &["நிறுவனங்கள்", "ஸ்டார்ட்அப்கள்"],
        above_before: &[],
        below_before: &[],
        above_after: &["க்கு மேல்", "மேல்"],
        below_after: &["க்கு கீழ்", "குறைவாக"],
        unknown_words: &["தெரியாது", "தகவல் இல்லை"],
    },
    messages: Messages {
        out_of_range: "மன்னிக்கவும், இந்த தரவுத்தொகுப்பு {min}-{max} மட்டுமே. {year} தரவு இல்லை.",
        no_results: "மன்னிக்கவும், {min}-{max} தரவுதளத்தில் இந்த கேள்விக்கு தொடர்புடைய தகவல் இல்லை. தயவுசெய்து:\n- வேறு வார்த்தைகளில் கேளுங்கள்\n- நிறுவனத்தின் முழு பெயரைச் சொல்லுங்கள்\n- துறை அல்லது நகரத்தை மாற்றுங்கள்",
        unsupported_sector: "மன்னிக்கவும், இந்த தரவுத்தொகுப்பில் {sector} துறை தகவல் இல்லை. கிடைக்கும் துறைகள்: {supported}.",
        not_in_dataset: "⚠️ குறிப்பு: இந்த நிறுவனம் எங்கள் நிதி தரவுத்தளத்தில் ({min}-{max}) இல்லை. மேலே உள்ள தகவல் பொது அறிவு.",
        company_description: "{sector} துறை நிறுவனம்",
        generic_description: "ஒரு ஸ்டார்ட்அப் நிறுவனம்",
        growth_unavailable: "வளர்ச்சியை கணக்கிட முடியாது ({a} இல் நிதி இல்லை).",
    },
    prompts: Prompts {
        company_lookup: "{company} என்ன செய்கிறது? 1-2 வாக்கியங்களில் - அவர்களின் வணிகம் மற்றும் முக்கிய சேவை.",
        task: "கீழே உள்ள தரவின் அடிப்படையில் கேள்விக்கு முழுமையான பதில் தமிழில் அளிக்கவும்.",
        data: "தரவு",
        question: "கேள்வி",
        instructions_header: "வழிமுறைகள்",
        instructions: &[
            "கொடுக்கப்பட்ட தரவை மட்டும் பயன்படுத்துங்கள்",
            "அனைத்து பெயர்களை தமிழ் எழுத்துக்களில் எழுதுங்கள் (Swiggy→ஸ்விகி, Bangalore→பெங்களூரு, Mumbai→மும்பை)",
            "முதலில் சுருக்கம்: \"மொத்தம் X நிறுவனங்கள், ₹Y கோடி மொத்த நிதி\"",
            "\"Unknown\" அல்லது \"தெரியாது\" என்று ஒருபோதும் எழுதாதீர்கள்",
            "எண்களில் பட்டியலிடுங்கள் (1. 2. 3.)",
        ],
        answer: "பதில்",
        script: "Tamil",
    },
};

// ============================================================================
// Kannada
// ============================================================================

pub static KN: LanguagePack = LanguagePack {
    language: Language::Kn,
    labels: Labels {
        total_funding: "ಒಟ್ಟು ಫಂಡಿಂಗ್",
        total_companies: "ಒಟ್ಟು ಕಂಪನಿಗಳು",
        deals: "ಒಪ್ಪಂದಗಳು",
        average: "ಸರಾಸರಿ",
        top_sectors: "ಪ್ರಮುಖ ವಲಯಗಳು",
        comparison: "ಹೋಲಿಕೆ",
        year: "ವರ್ಷ",
        sector: "ವಲಯ",
        companies: "ಕಂಪನಿಗಳು",
        companies_heading: "ಕಂಪನಿಗಳು",
        funding: "ಫಂಡಿಂಗ್",
        growth: "ಬೆಳವಣಿಗೆ",
        total: "ಒಟ್ಟು",
        crores: "ಕೋಟಿ",
        funding_summary: "ಫಂಡಿಂಗ್ ಸಾರಾಂಶ",
        rounds: "ಸುತ್ತುಗಳು",
        primary_sector: "ವಲಯ",
        location: "ಸ್ಥಳ",
        funding_rounds: "ಫಂಡಿಂಗ್ ಸುತ್ತುಗಳು",
        from: "ನಿಂದ",
        most_funded: "ಅತಿ ಹೆಚ್ಚು ಫಂಡಿಂಗ್ ಪಡೆದ ಕಂಪನಿ",
        largest_round: "ಅತಿದೊಡ್ಡ ಸುತ್ತು",
    },
    keywords: Keywords {
        comparison: &["ಹೋಲಿಕೆ", "ಹೋಲಿಸಿ", "ವ್ಯತ್ಯಾಸ", "ಪ್ರವೃತ್ತಿ", "ಬೆಳವಣಿಗೆ"],
        aggregation: &["ಒಟ್ಟು", "ಎಷ್ಟು", "ಸರಾಸರಿ"],
        ranked_list: &["ಟಾಪ್", "ಅತಿ ಹೆಚ್ಚು", "ಅತಿದೊಡ್ಡ", "ಅತಿ ಕಡಿಮೆ", "ಇತ್ತೀಚಿನ"],
        highest: &["ಅತಿ ಹೆಚ್ಚು", "ಅತಿದೊಡ್ಡ", "ಟಾಪ್"],
        lowest: &["ಅತಿ ಕಡಿಮೆ", "ಕಡಿಮೆ"],
        recent: &["ಇತ್ತೀಚಿನ", "ಹೊಸ"],
        most_funded: &["ಅತಿ ಹೆಚ್ಚು ಫಂಡಿಂಗ್"],
        list_nouns: &["ಕಂಪನಿಗಳು", "ಸ್ಟಾರ್ಟ್‌ಅಪ್‌ಗಳು"],
        above_before: &[],
        below_before: &[],
        above_after: &["ಕ್ಕಿಂತ ಹೆಚ್ಚು", "ಮೇಲೆ"],
        below_after: &["ಕ್ಕಿಂತ ಕಡಿಮೆ", "ಒಳಗೆ"],
        unknown_words: &["ತಿಳಿದಿಲ್ಲ", "ಮಾಹಿತಿ ಇಲ್ಲ"],
    },
    messages: Messages {
        out_of_range: "ಕ್ಷಮಿಸಿ, ಈ ಡೇಟಾಸೆಟ್ ಕೇವಲ {min}-{max}. {year} ಡೇಟಾ ಇಲ್ಲ.",
        no_results: "ಕ್ಷಮಿಸಿ, {min}-{max} ಡೇಟಾಸೆಟ್‌ನಲ್ಲಿ ಈ ಪ್ರಶ್ನೆಗೆ ಸಂಬಂಧಿಸಿದ ಮಾಹಿತಿ ಇಲ್ಲ. ದಯವಿಟ್ಟು:\n- ಬೇರೆ ಪದಗಳಲ್ಲಿ ಕೇಳಿ\n- ಕಂಪನಿಯ ಸಂಪೂರ್ಣ ಹೆಸರು ನೀಡಿ\n- ವಲಯ ಅಥವಾ ನಗರ ಬದಲಿಸಿ",
        unsupported_sector: "ಕ್ಷಮಿಸಿ, ಈ ಡೇಟಾಸೆಟ್‌ನಲ್ಲಿ {sector} ವಲಯದ ಮಾಹಿತಿ ಇಲ್ಲ. ಲಭ್ಯವಿರುವ ವಲಯಗಳು: {supported}.",
        not_in_dataset: "⚠️ ಸೂಚನೆ: ಈ ಕಂಪನಿ ನಮ್ಮ ಫಂಡಿಂಗ್ ಡೇಟಾಬೇಸ್‌ನಲ್ಲಿ ({min}-{max}) ಇಲ್ಲ. ಮೇಲಿನ ಮಾಹಿತಿ ಸಾಮಾನ್ಯ ಜ್ಞಾನ.",
        company_description: "{sector} ವಲಯದ ಕಂಪನಿ",
        generic_description: "ಒಂದು ಸ್ಟಾರ್ಟ್‌ಅಪ್ ಕಂಪನಿ",
        growth_unavailable: "ಬೆಳವಣಿಗೆ ಲೆಕ್ಕಿಸಲು ಸಾಧ್ಯವಿಲ್ಲ ({a} ರಲ್ಲಿ ಫಂಡಿಂಗ್ ಇಲ್ಲ).",
    },
    prompts: Prompts {
        company_lookup: "{company} ಏನು ಮಾಡುತ್ತದೆ? 1-2 ವಾಕ್ಯಗಳಲ್ಲಿ - ಅವರ ವ್ಯಾಪಾರ ಮತ್ತು ಮುಖ್ಯ ಸೇವೆ.",
        task: "ಕೆಳಗಿನ ಡೇಟಾದ ಆಧಾರದ ಮೇಲೆ ಪ್ರಶ್ನೆಗೆ ಸಂಪೂರ್ಣ ಉತ್ತರವನ್ನು ಕನ್ನಡದಲ್ಲಿ ನೀಡಿ.",
        data: "ಡೇಟಾ",
        question: "ಪ್ರಶ್ನೆ",
        instructions_header: "ಸೂಚನೆಗಳು",
        instructions: &[
            "ನೀಡಿದ ಡೇಟಾವನ್ನು ಮಾತ್ರ ಬಳಸಿ",
            "ಎಲ್ಲಾ ಹೆಸರುಗಳನ್ನು ಕನ್ನಡ ಲಿಪಿಯಲ್ಲಿ ಬರೆಯಿರಿ (Swiggy→ಸ್ವಿಗ್ಗಿ, Bangalore→ಬೆಂಗಳೂರು, Mumbai→ಮುಂಬೈ)",
            "ಮೊದಲು ಸಾರಾಂಶ: \"ಒಟ್ಟು X ಕಂಪನಿಗಳು, ₹Y ಕೋಟಿ ಒಟ್ಟು ಫಂಡಿಂಗ್\"",
            "\"Unknown\" ಅಥವಾ \"ತಿಳಿದಿಲ್ಲ\" ಎಂದು ಎಂದಿಗೂ ಬರೆಯಬೇಡಿ",
            "ಸಂಖ್ಯೆಗಳಲ್ಲಿ ಪಟ್ಟಿ ಮಾಡಿ (1. 2. 3.)",
        ],
        answer: "ಉತ್ತರ",
        script: "Kannada",
    },
};

// ============================================================================
// Marathi
// ============================================================================

pub static MR: LanguagePack = LanguagePack {
    language: Language::Mr,
    labels: Labels {
        total_funding: "एकूण फंडिंग",
        total_companies: "एकूण कंपन्या",
        deals: "व्यवहार",
        average: "सरासरी",
        top_sectors: "शीर्ष क्षेत्रे",
        comparison: "तुलना",
        year: "वर्ष",
        sector: "क्षेत्र",
        companies: "कंपन्या",
        companies_heading: "कंपन्या",
        funding: "फंडिंग",
        growth: "वाढ",
        total: "एकूण",
        crores: "कोटी",
        funding_summary: "फंडिंग सारांश",
        rounds: "फेऱ्या",
        primary_sector: "क्षेत्र",
        location: "ठिकाण",
        funding_rounds: "फंडिंग फेऱ्या",
        from: "पासून",
        most_funded: "सर्वाधिक फंडिंग मिळालेली कंपनी",
        largest_round: "सर्वात मोठी फेरी",
    },
    keywords: Keywords {
        comparison: &["तुलना", "फरक", "कल", "वाढ"],
        aggregation: &["एकूण", "किती", "सरासरी"],
        ranked_list: &["टॉप", "सर्वाधिक", "सर्वात मोठ्या", "सर्वात कमी", "नवीनतम"],
        highest: &["सर्वाधिक", "सर्वात मोठ्या", "सर्वात जास्त", "टॉप"],
        lowest: &["सर्वात कमी", "किमान"],
        recent: &["नवीनतम", "अलीकडील"],
        most_funded: &["सर्वाधिक फंडिंग", "सर्वात जास्त फंडिंग"],
        list_nouns: &["कंपन्या", "कंपन्यांची", "स्टार्टअप"],
        above_before: &[],
        below_before: &[],
        above_after: &["पेक्षा जास्त", "पेक्षा अधिक"],
        below_after: &["पेक्षा कमी", "पर्यंत"],
        unknown_words: &["अज्ञात", "माहिती नाही"],
    },
    messages: Messages {
        out_of_range: "क्षमस्व, हा डेटासेट फक्त {min}-{max} चा आहे। {year} चा डेटा उपलब्ध नाही.",
        no_results: "क्षमस्व, {min}-{max} डेटासेटमध्ये या प्रश्नासाठी संबंधित माहिती नाही. कृपया:\n- वेगळ्या शब्दांत विचारा\n- कंपनीचे पूर्ण नाव द्या\n- सेक्टर किंवा शहर बदला",
        unsupported_sector: "क्षमस्व, या डेटासेटमध्ये {sector} क्षेत्राची माहिती नाही. उपलब्ध क्षेत्रे: {supported}.",
        not_in_dataset: "⚠️ टीप: ही कंपनी आमच्या फंडिंग डेटाबेसमध्ये ({min}-{max}) नाही. वरील माहिती सामान्य ज्ञान आहे.",
        company_description: "{sector} क्षेत्रातील कंपनी",
        generic_description: "एक स्टार्टअप कंपनी",
        growth_unavailable: "वाढ मोजता येत नाही ({a} मध्ये फंडिंग नाही).",
    },
    prompts: Prompts {
        company_lookup: "{company} काय करते? 1-2 वाक्यात सांगा - त्यांचा व्यवसाय आणि मुख्य सेवा.",
        task: "खालील डेटाच्या आधारे प्रश्नाचे संपूर्ण उत्तर मराठीत द्या.",
        data: "डेटा",
        question: "प्रश्न",
        instructions_header: "सूचना",
        instructions: &[
            "फक्त दिलेला डेटा वापरा",
            "सर्व नावे मराठी लिपीत लिहा (Swiggy→स्विगी, Bangalore→बेंगलुरु, Mumbai→मुंबई)",
            "पहिले सारांश: \"एकूण X कंपन्या, ₹Y कोटी एकूण फंडिंग\"",
            "\"Unknown\" किंवा \"माहिती नाही\" कधीच लिहू नका",
            "संख्यांमध्ये यादी करा (1. 2. 3.)",
        ],
        answer: "उत्तर",
        script: "Devanagari Marathi",
    },
};

// ============================================================================
// Gujarati
// ============================================================================

pub static GU: LanguagePack = LanguagePack {
    language: Language::Gu,
    labels: Labels {
        total_funding: "કુલ ફંડિંગ",
        total_companies: "કુલ કંપનીઓ",
        deals: "સોદા",
        average: "સરેરાશ",
        top_sectors: "ટોચના સેક્ટર",
        comparison: "સરખામણી",
        year: "વર્ષ",
        sector: "સેક્ટર",
        companies: "કંપનીઓ",
        companies_heading: "કંપનીઓ",
        funding: "ફંડિંગ",
        growth: "વૃદ્ધિ",
        total: "કુલ",
        crores: "કરોડ",
        funding_summary: "ફંડિંગ સારાંશ",
        rounds: "રાઉન્ડ",
        primary_sector: "સેક્ટર",
        location: "સ્થાન",
        funding_rounds: "ફંડિંગ રાઉન્ડ",
        from: "થી",
        most_funded: "સૌથી વધુ ફંડિંગ મેળવનાર કંપની",
        largest_round: "સૌથી મોટો રાઉન્ડ",
    },
    keywords: Keywords {
        comparison: &["સરખામણી", "તફાવત", "વલણ", "વૃદ્ધિ"],
        aggregation: &["કુલ", "કેટલું", "કેટલી", "કેટલા", "સરેરાશ"],
        ranked_list: &["ટોપ", "ટોચની", "સૌથી વધુ", "સૌથી મોટી", "સૌથી ઓછી", "નવીનતમ"],
        highest: &["સૌથી વધુ", "સૌથી મોટી", "ટોપ", "ટોચની"],
        lowest: &["સૌથી ઓછી", "સૌથી ઓછું"],
        recent: &["નવીનતમ", "તાજેતરની"],
        most_funded: &["સૌથી વધુ ફંડિંગ"],
        list_nouns: &["કંપનીઓ", "સ્ટાર્ટઅપ"],
        above_before: &[],
        below_before: &[],
        above_after: &["થી વધુ", "થી વધારે"],
        below_after: &["થી ઓછું", "થી ઓછા", "સુધી"],
        unknown_words: &["અજાણ", "અજ્ઞાત", "માહિતી નથી"],
    },
    messages: Messages {
        out_of_range: "માફ કરશો, આ ડેટાસેટ ફક્ત {min}-{max} નો છે. {year} નો ડેટા ઉપલબ્ધ નથી.",
        no_results: "માફ કરશો, {min}-{max} ડેટાસેટમાં આ પ્રશ્ન માટે સંબંધિત માહિતી નથી. કૃપા કરીને:\n- અલગ શબ્દોમાં પૂછો\n- કંપનીનું સંપૂર્ણ નામ આપો\n- સેક્ટર અથવા શહેર બદલો",
        unsupported_sector: "માફ કરશો, આ ડેટાસેટમાં {sector} સેક્ટરની માહિતી નથી. ઉપલબ્ધ સેક્ટર: {supported}.",
        not_in_dataset: "⚠️ નોંધ: આ કંપની અમારા ફંડિંગ ડેટાબેઝ ({min}-{max}) માં નથી. ઉપરની માહિતી સામાન્ય જ્ઞાન છે.",
        company_description: "{sector} ક્ષેત્રની કંપની",
        generic_description: "એક સ્ટાર્ટઅપ કંપની",
        growth_unavailable: "વૃદ્ધિની ગણતરી શક્ય નથી ({a} માં ફંડિંગ નથી).",
    },
    prompts: Prompts {
        company_lookup: "{company} શું કરે છે? 1-2 વાક્યમાં - તેમનો વ્યવસાય અને મુખ્ય સેવા.",
        task: "નીચેના ડેટાના આધારે પ્રશ્નનો સંપૂર્ણ જવાબ ગુજરાતીમાં આપો.",
        data: "ડેટા",
        question: "પ્રશ્ન",
        instructions_header: "સૂચના",
        instructions: &[
            "ફક્ત આપેલા ડેટાનો ઉપયોગ કરો",
            "બધા નામો ગુજરાતી લિપિમાં લખો (Swiggy→સ્વિગી, Bangalore→બેંગલુરુ, Mumbai→મુંબઈ)",
            "પહેલાં સારાંશ: \"કુલ X કંપનીઓ, ₹Y કરોડ કુલ ફંડિંગ\"",
            "\"Unknown\" અથવા \"અજ્ઞાત\" ક્યારેય લખશો નહીં",
            "સંખ્યાઓમાં યાદી કરો (1. 2. 3.)",
        ],
        answer: "જવાબ",
        script: "Gujarati",
    },
};

// ============================================================================
// Bengali
// ============================================================================

pub static BN: LanguagePack = LanguagePack {
    language: Language::Bn,
    labels: Labels {
        total_funding: "মোট ফান্ডিং",
        total_companies: "মোট কোম্পানি",
        deals: "চুক্তি",
        average: "গড়",
        top_sectors: "শীর্ষ সেক্টর",
        comparison: "তুলনা",
        year: "বছর",
        sector: "সেক্টর",
        companies: "কোম্পানি",
        companies_heading: "কোম্পানি",
        funding: "ফান্ডিং",
        growth: "বৃদ্ধি",
        total: "মোট",
        crores: "কোটি",
        funding_summary: "ফান্ডিং সারসংক্ষেপ",
        rounds: "রাউন্ড",
        primary_sector: "সেক্টর",
        location: "অবস্থান",
        funding_rounds: "ফান্ডিং রাউন্ড",
        from: "থেকে",
        most_funded: "সর্বাধিক ফান্ডিং পাওয়া কোম্পানি",
        largest_round: "সবচেয়ে বড় রাউন্ড",
    },
    keywords: Keywords {
        comparison: &["তুলনা", "পার্থক্য", "প্রবণতা", "বৃদ্ধি"],
        aggregation: &["মোট", "কত", "গড়"],
        ranked_list: &["টপ", "শীর্ষ", "সর্বাধিক", "সবচেয়ে বড়", "সবচেয়ে কম", "সর্বশেষ"],
        highest: &["সর্বাধিক", "সবচেয়ে বড়", "সবচেয়ে বেশি", "টপ", "শীর্ষ"],
        lowest: &["সবচেয়ে কম", "সর্বনিম্ন"],
        recent: &["সর্বশেষ", "সাম্প্রতিক"],
        most_funded: &["সর্বাধিক ফান্ডিং", "সবচেয়ে বেশি ফান্ডিং"],
        list_nouns: &["কোম্পানি", "স্টার্টআপ"],
        above_before: &[],
        below_before: &[],
        above_after: &["এর বেশি", "এর উপরে"],
        below_after: &["এর কম", "এর নিচে", "পর্যন্ত"],
        unknown_words: &["অজানা", "জানা নেই", "তথ্য নেই"],
    },
    messages: Messages {
        out_of_range: "দুঃখিত, এই ডেটাসেট শুধু {min}-{max}। {year} এর ডেটা নেই।",
        no_results: "দুঃখিত, {min}-{max} ডেটাসেটে এই প্রশ্নের জন্য প্রাসঙ্গিক তথ্য নেই। অনুগ্রহ করে:\n- অন্য শব্দে জিজ্ঞাসা করুন\n- কোম্পানির সম্পূর্ণ নাম বলুন\n- সেক্টর বা শহর পরিবর্তন করুন",
        unsupported_sector: "দুঃখিত, এই ডেটাসেটে {sector} সেক্টরের তথ্য নেই। উপলব্ধ সেক্টর: {supported}।",
        not_in_dataset: "⚠️ দ্রষ্টব্য: এই কোম্পানি আমাদের ফান্ডিং ডেটাবেসে ({min}-{max}) নেই। উপরের তথ্য সাধারণ জ্ঞান।",
        company_description: "{sector} সেক্টরের কোম্পানি",
        generic_description: "একটি স্টার্টআপ কোম্পানি",
        growth_unavailable: "বৃদ্ধি গণনা করা সম্ভব নয় ({a} এ কোনো ফান্ডিং নেই)।",
    },
    prompts: Prompts {
        company_lookup: "{company} কী করে? 1-2 বাক্যে - তাদের ব্যবসা এবং প্রধান সেবা।",
        task: "নিচের ডেটার ভিত্তিতে প্রশ্নের সম্পূর্ণ উত্তর বাংলায় দিন।",
        data: "ডেটা",
        question: "প্রশ্ন",
        instructions_header: "নির্দেশাবলী",
        instructions: &[
            "শুধুমাত্র প্রদত্ত ডেটা ব্যবহার করুন",
            "সমস্ত নাম বাংলা লিপিতে লিখুন (Swiggy→সুইগি, Bangalore→বেঙ্গালুরু, Mumbai→মুম্বাই)",
            "প্রথমে সারসংক্ষেপ: \"মোট X কোম্পানি, ₹Y কোটি মোট ফান্ডিং\"",
            "\"Unknown\" বা \"অজানা\" কখনো লিখবেন না",
            "সংখ্যায় তালিকা করুন (1. 2. 3.)",
        ],
        answer: "উত্তর",
        script: "Bengali",
    },
};
