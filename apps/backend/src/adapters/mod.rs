pub mod documents_sea;
