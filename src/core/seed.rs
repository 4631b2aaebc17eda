//! Built-in sample knowledge base
//!
//! Ten Technology entries spread over eight languages, used whenever no
//! data file is available.

use super::entry::QaEntry;

const SAMPLES: &[(&str, &str, &str)] = &[
    (
        "en",
        "What is artificial intelligence?",
        "Artificial Intelligence (AI) is the simulation of human intelligence processes by machines, especially computer systems. These processes include learning, reasoning, and self-correction.",
    ),
    (
        "es",
        "¿Qué es el aprendizaje automático?",
        "El aprendizaje automático es una rama de la inteligencia artificial que permite a las computadoras aprender y mejorar automáticamente a partir de la experiencia sin ser programadas explícitamente.",
    ),
    (
        "fr",
        "Qu'est-ce que la science des données?",
        "La science des données est un domaine interdisciplinaire qui utilise des méthodes, des processus, des algorithmes et des systèmes scientifiques pour extraire des connaissances et des idées à partir de données structurées et non structurées.",
    ),
    (
        "en",
        "How does natural language processing work?",
        "Natural Language Processing (NLP) works by combining computational linguistics with statistical, machine learning, and deep learning models. It enables computers to understand, interpret, and generate human language in a valuable way.",
    ),
    (
        "de",
        "Was ist neuronales Netzwerk?",
        "Ein neuronales Netzwerk ist ein Rechenmodell, das von der Struktur und Funktion des menschlichen Gehirns inspiriert ist. Es besteht aus verbundenen Knoten (Neuronen), die Informationen verarbeiten.",
    ),
    (
        "hi",
        "डेटा विज्ञान क्या है?",
        "डेटा विज्ञान एक अंतःविषय क्षेत्र है जो संरचित और असंरचित डेटा से ज्ञान और अंतर्दृष्टि निकालने के लिए वैज्ञानिक विधियों, प्रक्रियाओं और एल्गोरिदम का उपयोग करता है।",
    ),
    (
        "en",
        "What are the benefits of machine learning?",
        "Machine learning benefits include automation of tasks, improved accuracy, ability to handle large datasets, pattern recognition, predictive analytics, and continuous improvement over time without explicit programming.",
    ),
    (
        "zh",
        "什么是深度学习?",
        "深度学习是机器学习的一个子集，它使用多层神经网络来学习数据的复杂表示。深度学习在图像识别、语音识别和自然语言处理等领域取得了突破性进展。",
    ),
    (
        "ar",
        "ما هو تعلم الآلة?",
        "تعلم الآلة هو فرع من الذكاء الاصطناعي يمكّن أجهزة الكمبيوتر من التعلم والتحسين تلقائياً من التجربة دون أن يتم برمجتها صراحةً.",
    ),
    (
        "ja",
        "人工知能とは何ですか？",
        "人工知能（AI）は、機械、特にコンピュータシステムによる人間の知能プロセスのシミュレーションです。これらのプロセスには、学習、推論、自己修正が含まれます。",
    ),
];

/// The sample entries, ids 1 through 10
pub fn sample_entries() -> Vec<QaEntry> {
    SAMPLES
        .iter()
        .zip(1u64..)
        .map(|(&(language, question, answer), id)| QaEntry {
            id,
            language: language.to_string(),
            question: question.to_string(),
            answer: answer.to_string(),
            category: "Technology".to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_ids_are_sequential() {
        let entries = sample_entries();
        assert_eq!(entries.len(), 10);
        let ids: Vec<u64> = entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_sample_language_order() {
        let langs: Vec<String> = sample_entries().into_iter().map(|e| e.language).collect();
        assert_eq!(
            langs,
            ["en", "es", "fr", "en", "de", "hi", "en", "zh", "ar", "ja"]
        );
    }
}
