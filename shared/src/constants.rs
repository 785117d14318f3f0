use std::time::Duration;

pub const API_PROXY_PATH: &str = "/api/proxy";
pub const NEW_GAME_ENDPOINT: &str = "/game/new";

pub const POLL_INTERVAL: Duration = Duration::from_millis(1500);

pub const MIN_PVP_PLAYERS: usize = 1;
pub const MAX_PVP_PLAYERS: usize = 5;
pub const PVC_PLAYERS: usize = 1;
pub const MIN_WORD_LENGTH: usize = 3;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 6;
pub const HANGMAN_PARTS: u32 = 6;

pub const STORAGE_GAME_ID_KEY: &str = "forca_game_id";
pub const STORAGE_PLAYER_NAME_KEY: &str = "forca_player_name";

pub const INVITE_QUERY_PARAM: &str = "game";
pub const QR_SERVICE_URL: &str = "https://api.qrserver.com/v1/create-qr-code/?size=200x200&data=";

pub const UNKNOWN_ERROR: &str = "Erro desconhecido";
pub const NETWORK_ERROR: &str = "Erro ao conectar com o servidor";
pub const INVALID_RESPONSE_ERROR: &str = "Resposta inválida do servidor";
pub const EMPTY_NAME_ERROR: &str = "Digite um nome para o jogador!";
pub const DUPLICATE_PLAYER_ERROR: &str = "Este jogador já foi adicionado!";
pub const PVC_PLAYERS_ERROR: &str = "Adicione 1 jogador para o modo Jogador vs CPU!";
pub const PVP_MIN_PLAYERS_ERROR: &str = "Adicione pelo menos 1 jogador para iniciar no modo PvP!";
pub const PVP_MAX_PLAYERS_ERROR: &str = "Máximo de 5 jogadores!";
pub const EMPTY_WORD_ERROR: &str = "Digite uma palavra!";
pub const WORD_LETTERS_ERROR: &str = "A palavra deve conter apenas letras!";
pub const WORD_LENGTH_ERROR: &str = "A palavra deve ter pelo menos 3 letras!";
pub const SINGLE_LETTER_ERROR: &str = "Envie apenas uma letra";
pub const GAME_GONE_ERROR: &str = "Jogo não encontrado ou já finalizado";

pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
