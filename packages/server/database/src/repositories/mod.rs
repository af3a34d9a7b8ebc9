pub mod disease_repo;
pub mod history_repo;
pub mod rule_repo;
pub mod symptom_repo;
pub mod user_repo;

pub use disease_repo::DiseaseRepository;
pub use history_repo::HistoryRepository;
pub use rule_repo::RuleRepository;
pub use symptom_repo::SymptomRepository;
pub use user_repo::UserRepository;
