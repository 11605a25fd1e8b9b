pub mod caixa;
