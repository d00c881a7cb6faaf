//! Help command handler

use crate::utils::errors::Result;

const HELP_TEXT: &str = "🏀 HoopBuddy 사용법\n\n\
    [회원]\n\
    !회원등록 <이름> - 회원 등록\n\
    !회원조회 <이름> [member_id] - 회원 조회\n\
    !회원삭제 <이름> - 회원 삭제\n\n\
    [팀]\n\
    !팀생성 <팀이름> - 팀 생성 (!팀추가)\n\
    !팀조회 [팀이름] - 팀 조회 (!팀목록)\n\
    !팀배정 <이름> <팀> - 팀 배정\n\
    !팀해제 <이름> - 팀 배정 해제\n\
    !팀확인 [이름] [member_id] - 소속 팀 확인\n\n\
    [게임]\n\
    !게임생성 [YYYY-MM-DD] - 게임 생성 (!게임추가)\n\
    !게임목록 - 게임 목록 (!게임조회)\n\n\
    [기타]\n\
    !echo <메시지> - 메시지 에코 (!에코)\n\
    !health - 서버 상태 확인\n\
    !도움말 - 이 메시지 표시 (!help)";

/// Handle `!help` / `!도움말` — static text, no network call
pub async fn handle() -> Result<Option<String>> {
    Ok(Some(HELP_TEXT.to_string()))
}
