/// Module d'authentification - pipeline de login en trois étapes :
/// porte d'entrée (extractors), validation, puis transmission au backend
pub mod backend;
pub mod extractors;
pub mod services;
pub mod validation;
