//! Portuguese translations (pt-PT)

use super::keys::Translations;

pub const TRANSLATIONS: Translations = Translations {
    about: "Sobre",
    banner: " não tem QUALQUER GARANTIA. É software livre e você está \
             autorizado a redistribui-lo dentro de certas condições.",
    exit: "Sair",
    file: "Ficheiro",
    help: "Ajuda",
    press_any_key: "Prima qualquer tecla para continuar...",
    private_ip: "IP privado: ",
    public_ip: "IP público: ",
    version: "Versão",
    version_with_spaces: " versão ",
    win_title: "Endereços IP",
    wrong_arg: "Erro: argumento incorreto ",
    usage: "\
Utilização: ipaddresses [opção]

Mostra os endereços IP privado e público desta máquina.

Opções:
  (nenhuma)       mostra os dois endereços e termina
  -g, --gui       abre a janela
  -h, --help      mostra esta ajuda e termina
  -v, --version   mostra a versão e termina

Teclas da janela:
  F1              ajuda
  Alt+F / Alt+H   menu Ficheiro / Ajuda
  Esc, q          fechar",

    resolution_failed: "indisponível (não foi possível resolver o nome da máquina)",
    network_failed: "indisponível (não foi possível contactar o serviço de endereços)",
    timeout_failed: "indisponível (o serviço de endereços não respondeu a tempo)",
    upstream_failed: "indisponível (o serviço de endereços devolveu uma resposta inválida)",
};
