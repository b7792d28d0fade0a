//! The deployed question set.
//!
//! Values are the tokens persisted with submissions and counted by the
//! analytics aggregator; labels are what the wizard renders. Keep them in
//! sync with any frontend copy of this catalog.

use super::question::{Cardinality, Question, QuestionOption};

const fn opt(label: &'static str, value: &'static str) -> QuestionOption {
    QuestionOption { label, value }
}

pub static QUESTIONS: [Question; 8] = [
    Question {
        id: "v1",
        step: 1,
        prompt: "1. Bu calismanin temel amaci hangisidir?",
        cardinality: Cardinality::Single,
        options: &[
            opt("Mevcut durumu korumak", "Mevcut durumu korumak"),
            opt("Iyilestirmek", "Iyilestirmek"),
            opt("Buyutmek", "Buyutmek"),
            opt("Azaltmak", "Azaltmak"),
            opt("Standardize etmek", "Standardize etmek"),
            opt("Yeni bir sey olusturmak", "Yeni bir sey olusturmak"),
            opt("Sorun cozmek", "Sorun cozmek"),
            opt("Risk azaltmak", "Risk azaltmak"),
        ],
        has_numeric_range: false,
    },
    Question {
        id: "v2",
        step: 2,
        prompt: "2. Bu amac hangi ana konu ile ilgilidir?",
        cardinality: Cardinality::Multiple,
        options: &[
            opt("Urun", "Urun"),
            opt("Surec", "Surec"),
            opt("Maliyet", "Maliyet"),
            opt("Kalite", "Kalite"),
            opt("Zaman", "Zaman"),
            opt("Insan / Yetkinlik", "Insan"),
            opt("Musteri", "Musteri"),
            opt("Tedarikci", "Tedarikci"),
            opt("Guvenlik", "Guvenlik"),
            opt("Mevzuat / Standart", "Standart"),
        ],
        has_numeric_range: false,
    },
    Question {
        id: "v3",
        step: 3,
        prompt: "3. Bu amac hangi alanda sonuc uretmelidir?",
        cardinality: Cardinality::Single,
        options: &[
            opt("Tum sirket", "Tum sirket"),
            opt("Belirli bir fabrika", "Belirli bir fabrika"),
            opt("Belirli bir bolum", "Belirli bir bolum"),
            opt("Belirli bir surec", "Belirli bir surec"),
            opt("Belirli bir urun grubu", "Belirli bir urun grubu"),
            opt("Belirli bir proje", "Belirli bir proje"),
        ],
        has_numeric_range: false,
    },
    Question {
        id: "v4",
        step: 4,
        prompt: "4. Bu amac gerceklestiginde hangisi farkli olacak?",
        cardinality: Cardinality::Multiple,
        options: &[
            opt("Daha hizli", "daha hizli"),
            opt("Daha ucuz", "daha ucuz"),
            opt("Daha kaliteli", "daha kaliteli"),
            opt("Daha az hata", "daha az hatali"),
            opt("Daha standart", "daha standart"),
            opt("Daha guvenli", "daha guvenli"),
            opt("Daha olculebilir", "daha olculebilir"),
            opt("Daha ongörülebilir", "daha ongörülebilir"),
        ],
        has_numeric_range: false,
    },
    Question {
        id: "v5",
        step: 5,
        prompt: "5. Bu amacin gerceklestigini hangi gostergeyle anlayacagiz?",
        cardinality: Cardinality::Single,
        options: &[
            opt("Oran (%)", "Oran (%)"),
            opt("Sure (dakika/saat/gun)", "Sure"),
            opt("Adet", "Adet"),
            opt("Maliyet (TL/EUR/USD)", "Maliyet"),
            opt("Hata sayisi", "Hata sayisi"),
            opt("Musteri geri bildirimi", "Musteri geri bildirimi"),
            opt("Denetim sonucu", "Denetim sonucu"),
            opt("Standart uyum durumu", "Uyum durumu"),
        ],
        has_numeric_range: true,
    },
    Question {
        id: "v6",
        step: 6,
        prompt: "6. Bu amac hangi zaman diliminde gerceklesmelidir?",
        cardinality: Cardinality::Single,
        options: &[
            opt("1 ay icinde", "1 ay icinde"),
            opt("3 ay icinde", "3 ay icinde"),
            opt("6 ay icinde", "6 ay icinde"),
            opt("1 yil icinde", "1 yil icinde"),
            opt("Surekli (periyodik takip)", "Surekli"),
        ],
        has_numeric_range: false,
    },
    Question {
        id: "v7",
        step: 7,
        prompt: "7. Bu amac en cok kimi etkiler?",
        cardinality: Cardinality::Multiple,
        options: &[
            opt("Uretim", "Uretim"),
            opt("Kalite", "Kalite"),
            opt("Satis", "Satis"),
            opt("Musteri", "Musteri"),
            opt("Ust yonetim", "Ust yonetim"),
            opt("Calisanlar", "Calisanlar"),
            opt("Tedarikciler", "Tedarikciler"),
            opt("Denetciler", "Denetciler"),
        ],
        has_numeric_range: false,
    },
    Question {
        id: "v8",
        step: 8,
        prompt: "8. Bu amac gerceklestirilmezse hangisi olur?",
        cardinality: Cardinality::Multiple,
        options: &[
            opt("Maliyet artar", "Maliyet artar"),
            opt("Zaman kaybi devam eder", "Zaman kaybi"),
            opt("Kalite riski olusur", "Kalite riski"),
            opt("Musteri kaybi olur", "Musteri kaybi"),
            opt("Yasal risk olusur", "Yasal risk"),
            opt("Rekabet gucu azalir", "Rekabet kaybi"),
            opt("Hicbir kritik etkisi yok", "Etki yok"),
        ],
        has_numeric_range: false,
    },
];
