// src/domain/catalog.rs
use chrono::{DateTime, Duration, Utc};

use super::bids::BidRecord;
use super::core::{AuctionId, AuctionStatus, Category};
use super::listings::{AuctionDetails, AuctionListing};
use crate::money::Amount;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub listing: AuctionListing,
    pub details: AuctionDetails,
    /// Newest bid first.
    pub bids: Vec<BidRecord>,
}

/// Outcome of resolving an id taken from a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    Found(&'a CatalogEntry),
    /// The id matched nothing and the first entry stands in for it.
    Fallback(&'a CatalogEntry),
}

impl<'a> Lookup<'a> {
    pub fn entry(&self) -> &'a CatalogEntry {
        match self {
            Lookup::Found(entry) | Lookup::Fallback(entry) => entry,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Lookup::Fallback(_))
    }
}

/// Read-only auction collection. Built once and never changed afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Catalog { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn listings(&self) -> impl Iterator<Item = &AuctionListing> {
        self.entries.iter().map(|entry| &entry.listing)
    }

    pub fn get(&self, id: AuctionId) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.listing.id == id)
    }

    /// Resolves a string-encoded id by exact numeric match, so `"2"`, `"2.0"`
    /// and `"2e0"` all name auction 2. Anything that does not name
    /// an auction resolves to the first entry. `None` only for an empty catalog.
    pub fn resolve(&self, raw_id: &str) -> Option<Lookup<'_>> {
        let found = parse_id(raw_id).and_then(|id| self.get(id));
        match found {
            Some(entry) => Some(Lookup::Found(entry)),
            None => self.entries.first().map(Lookup::Fallback),
        }
    }

    /// The marketplace's fixed auction set, with times relative to `now`.
    pub fn with_fixtures(now: DateTime<Utc>) -> Self {
        Catalog::new(fixtures(now))
    }
}

fn parse_id(raw_id: &str) -> Option<AuctionId> {
    let text = raw_id.trim();
    if let Ok(id) = text.parse::<AuctionId>() {
        return Some(id);
    }
    let number = text.parse::<f64>().ok()?;
    if number.is_finite() && number.fract() == 0.0 && number.abs() < AuctionId::MAX as f64 {
        Some(number as AuctionId)
    } else {
        None
    }
}

fn bid(id: i64, participant: &str, price: i64, time: DateTime<Utc>) -> BidRecord {
    BidRecord {
        id,
        participant: participant.to_string(),
        price: Amount::rub(price),
        time,
    }
}

fn fixtures(now: DateTime<Utc>) -> Vec<CatalogEntry> {
    let hours = Duration::hours;
    let days = Duration::days;

    vec![
        CatalogEntry {
            listing: AuctionListing {
                id: 1,
                title: "Поставка офисного оборудования".to_string(),
                description: "Комплект офисного оборудования для муниципального учреждения".to_string(),
                current_price: Amount::rub(2_450_000),
                start_price: Amount::rub(3_200_000),
                end_time: now + days(2),
                category: Category::Equipment,
                status: AuctionStatus::Active,
                bids_count: 12,
                image: "🖥️".to_string(),
            },
            details: AuctionDetails {
                organizer_name: "ГКУ \"Центр закупок города Москвы\"".to_string(),
                organizer_inn: "7701234567".to_string(),
                lot_number: "ЭА-2026-001234".to_string(),
                min_step: Amount::rub(50_000),
                specifications: "Компьютеры персональные - 25 шт., Мониторы LCD 24\" - 25 шт., Принтеры лазерные - 5 шт., МФУ - 3 шт., Сетевое оборудование - комплект".to_string(),
                delivery_terms: "Поставка в течение 30 календарных дней с момента заключения договора. Место поставки: г. Москва, ул. Тверская, д. 13".to_string(),
                payment_terms: "Оплата производится в течение 30 банковских дней после подписания акта приема-передачи".to_string(),
            },
            bids: vec![
                bid(1, "ООО \"СтройТех\"", 2_450_000, now - hours(2)),
                bid(2, "ИП Петров А.С.", 2_500_000, now - hours(4)),
                bid(3, "ООО \"ТехСнаб\"", 2_600_000, now - hours(6)),
                bid(4, "ООО \"ПромКомплект\"", 2_700_000, now - hours(10)),
                bid(5, "ООО \"МегаСнаб\"", 2_850_000, now - hours(15)),
            ],
        },
        CatalogEntry {
            listing: AuctionListing {
                id: 2,
                title: "Строительные материалы".to_string(),
                description: "Закупка строительных материалов для дорожного ремонта".to_string(),
                current_price: Amount::rub(5_600_000),
                start_price: Amount::rub(7_200_000),
                end_time: now + hours(5),
                category: Category::Construction,
                status: AuctionStatus::Ending,
                bids_count: 24,
                image: "🏗️".to_string(),
            },
            details: AuctionDetails {
                organizer_name: "Департамент строительства".to_string(),
                organizer_inn: "7702345678".to_string(),
                lot_number: "ЭА-2026-002345".to_string(),
                min_step: Amount::rub(100_000),
                specifications: "Асфальтобетонная смесь - 500 тонн, Щебень фракция 5-20 - 200 м³, Песок строительный - 150 м³, Бордюрный камень - 1000 м.п.".to_string(),
                delivery_terms: "Поставка партиями в течение 60 календарных дней. Место поставки: г. Санкт-Петербург, складская база заказчика".to_string(),
                payment_terms: "Поэтапная оплата после приемки каждой партии в течение 15 банковских дней".to_string(),
            },
            bids: vec![
                bid(1, "ООО \"ДорСтрой\"", 5_600_000, now - hours(1)),
                bid(2, "ООО \"СтройТех\"", 5_800_000, now - hours(3)),
                bid(3, "АО \"Магистраль\"", 6_100_000, now - hours(8)),
            ],
        },
        CatalogEntry {
            listing: AuctionListing {
                id: 3,
                title: "Медицинское оборудование".to_string(),
                description: "Оборудование для диагностического центра".to_string(),
                current_price: Amount::rub(8_900_000),
                start_price: Amount::rub(12_000_000),
                end_time: now + days(7),
                category: Category::Medicine,
                status: AuctionStatus::Active,
                bids_count: 8,
                image: "🏥".to_string(),
            },
            details: AuctionDetails {
                organizer_name: "ГБУЗ \"Городская клиническая больница № 5\"".to_string(),
                organizer_inn: "7703456789".to_string(),
                lot_number: "ЭА-2026-003456".to_string(),
                min_step: Amount::rub(150_000),
                specifications: "Аппарат УЗИ экспертного класса - 2 шт., Электрокардиограф 12-канальный - 4 шт., Монитор пациента - 6 шт.".to_string(),
                delivery_terms: "Поставка, монтаж и ввод в эксплуатацию в течение 45 календарных дней. Место поставки: г. Москва, ул. Ленинская, д. 8".to_string(),
                payment_terms: "Оплата в течение 30 банковских дней после подписания акта ввода в эксплуатацию".to_string(),
            },
            bids: vec![
                bid(1, "ООО \"МедТехника\"", 8_900_000, now - hours(5)),
                bid(2, "АО \"Диагностика Плюс\"", 9_500_000, now - hours(20)),
                bid(3, "ООО \"МедСнаб\"", 10_400_000, now - hours(30)),
            ],
        },
        CatalogEntry {
            listing: AuctionListing {
                id: 4,
                title: "IT-услуги и программное обеспечение".to_string(),
                description: "Разработка и внедрение информационной системы".to_string(),
                current_price: Amount::rub(3_200_000),
                start_price: Amount::rub(4_500_000),
                end_time: now + days(3),
                category: Category::IT,
                status: AuctionStatus::Active,
                bids_count: 15,
                image: "💻".to_string(),
            },
            details: AuctionDetails {
                organizer_name: "Департамент информационных технологий".to_string(),
                organizer_inn: "7704567890".to_string(),
                lot_number: "ЭА-2026-004567".to_string(),
                min_step: Amount::rub(100_000),
                specifications: "Разработка модулей учета обращений граждан, интеграция с ЕСИА, техническая поддержка в течение 12 месяцев".to_string(),
                delivery_terms: "Выполнение работ в три этапа в течение 120 календарных дней с момента заключения договора".to_string(),
                payment_terms: "Оплата по этапам в течение 10 банковских дней после подписания акта сдачи-приемки этапа".to_string(),
            },
            bids: vec![
                bid(1, "ООО \"Софтлайн Решения\"", 3_200_000, now - hours(3)),
                bid(2, "ООО \"ИнфоСистемы\"", 3_500_000, now - hours(9)),
                bid(3, "ИП Соколов Д.В.", 3_900_000, now - hours(26)),
            ],
        },
        CatalogEntry {
            listing: AuctionListing {
                id: 5,
                title: "Автотранспорт".to_string(),
                description: "Поставка служебных автомобилей".to_string(),
                current_price: Amount::rub(4_100_000),
                start_price: Amount::rub(5_800_000),
                end_time: now + days(1),
                category: Category::Transport,
                status: AuctionStatus::Ending,
                bids_count: 19,
                image: "🚗".to_string(),
            },
            details: AuctionDetails {
                organizer_name: "Управление делами администрации".to_string(),
                organizer_inn: "7705678901".to_string(),
                lot_number: "ЭА-2026-005678".to_string(),
                min_step: Amount::rub(100_000),
                specifications: "Легковой автомобиль класса C - 3 шт., Микроавтобус пассажирский - 1 шт.".to_string(),
                delivery_terms: "Поставка в течение 20 календарных дней. Место поставки: г. Казань, ул. Баумана, д. 2".to_string(),
                payment_terms: "Оплата в течение 15 банковских дней после постановки на учет".to_string(),
            },
            bids: vec![
                bid(1, "ООО \"АвтоПарк\"", 4_100_000, now - Duration::minutes(30)),
                bid(2, "ООО \"ТрансЛизинг\"", 4_300_000, now - hours(4)),
                bid(3, "АО \"АвтоДилер\"", 4_700_000, now - hours(12)),
            ],
        },
        CatalogEntry {
            listing: AuctionListing {
                id: 6,
                title: "Поставка канцелярских товаров".to_string(),
                description: "Годовая поставка канцелярии для образовательных учреждений".to_string(),
                current_price: Amount::rub(890_000),
                start_price: Amount::rub(1_200_000),
                end_time: now + days(4),
                category: Category::Goods,
                status: AuctionStatus::Active,
                bids_count: 7,
                image: "📝".to_string(),
            },
            details: AuctionDetails {
                organizer_name: "Управление образования".to_string(),
                organizer_inn: "7706789012".to_string(),
                lot_number: "ЭА-2026-006789".to_string(),
                min_step: Amount::rub(10_000),
                specifications: "Бумага офисная А4 - 2000 пачек, Ручки шариковые - 5000 шт., Тетради - 10000 шт., Папки-регистраторы - 800 шт.".to_string(),
                delivery_terms: "Ежеквартальная поставка партиями в течение 12 месяцев по адресам образовательных учреждений".to_string(),
                payment_terms: "Оплата каждой партии в течение 10 банковских дней после приемки".to_string(),
            },
            bids: vec![
                bid(1, "ООО \"КанцОпт\"", 890_000, now - hours(6)),
                bid(2, "ИП Иванова Е.Н.", 950_000, now - hours(18)),
                bid(3, "ООО \"Офис-Премьер\"", 1_010_000, now - hours(40)),
            ],
        },
    ]
}
